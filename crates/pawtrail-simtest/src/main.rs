//! Pawtrail Headless Simulation Harness
//!
//! Validates the catalogs, the reward economy, and the progression state
//! machines without a client. Runs entirely in-process — no storage, no
//! networking, no rendering.
//!
//! Usage:
//!   cargo run -p pawtrail-simtest
//!   cargo run -p pawtrail-simtest -- --verbose

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use pawtrail_core::catalog::{AchievementCatalog, Category};
use pawtrail_core::economy::{roll_loot, tier_for_roll, DROP_CHANCE};
use pawtrail_core::hints::{self, HintError};
use pawtrail_core::loot::{LootCatalog, LootRarity};
use pawtrail_core::orchestrator::Orchestrator;
use pawtrail_core::persistence::{from_json, to_json};
use pawtrail_core::progress::progress_percentage;
use pawtrail_core::session::{LandmarkCounts, SessionFact, Weather};
use pawtrail_core::store::ProgressState;
use pawtrail_logic::currency::{bones_for_distance, loot_trials};
use pawtrail_logic::pace::next_steady_run;
use pawtrail_logic::streak::DailyStreak;
use pawtrail_logic::weekend::WeekendStreak;
use pawtrail_logic::window::hour_in_window;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Pawtrail Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Achievement catalog validation
    results.extend(validate_achievement_catalog(verbose));

    // 2. Treasure catalog validation
    results.extend(validate_loot_catalog(verbose));

    // 3. Currency conversion sweep
    results.extend(validate_currency(verbose));

    // 4. Streak state machines
    results.extend(validate_streaks(verbose));

    // 5. Time windows & pace band
    results.extend(validate_windows_and_pace(verbose));

    // 6. Loot distribution under a seeded RNG
    results.extend(validate_loot_distribution(verbose));

    // 7. End-to-end walk simulation
    results.extend(simulate_walk_month(verbose));

    // 8. Hint shop flow
    results.extend(validate_hint_shop(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Achievement Catalog ──────────────────────────────────────────────

fn validate_achievement_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Achievement Catalog ---");
    let mut results = Vec::new();
    let catalog = AchievementCatalog::builtin();

    results.push(TestResult {
        name: "catalog_size".into(),
        passed: catalog.len() == 41,
        detail: format!("{} achievement definitions", catalog.len()),
    });

    // Every category has at least one definition
    for category in Category::ALL {
        let count = catalog.by_category(category).count();
        results.push(TestResult {
            name: format!("catalog_category_{category:?}"),
            passed: count > 0,
            detail: format!("{count} definitions"),
        });
    }

    // Rewards are positive and ids resolve through the index
    let bad_reward: Vec<_> = catalog.iter().filter(|d| d.reward_bones == 0).collect();
    results.push(TestResult {
        name: "catalog_positive_rewards".into(),
        passed: bad_reward.is_empty(),
        detail: if bad_reward.is_empty() {
            "all rewards positive".into()
        } else {
            format!("{} zero-reward definitions", bad_reward.len())
        },
    });

    let unresolvable = catalog.iter().filter(|d| catalog.lookup(d.id).is_none()).count();
    results.push(TestResult {
        name: "catalog_index_complete".into(),
        passed: unresolvable == 0,
        detail: format!("{unresolvable} ids missing from the index"),
    });

    // Landmark definitions carry a scope; nothing else does
    let scoped_outside = catalog
        .iter()
        .filter(|d| d.landmark_scope.is_some() && d.category != Category::Landmark)
        .count();
    let unscoped_inside = catalog
        .by_category(Category::Landmark)
        .filter(|d| d.landmark_scope.is_none())
        .count();
    results.push(TestResult {
        name: "catalog_landmark_scopes".into(),
        passed: scoped_outside == 0 && unscoped_inside == 0,
        detail: format!(
            "{scoped_outside} misplaced scopes, {unscoped_inside} landmark defs without one"
        ),
    });

    if verbose {
        println!("  Definitions by category:");
        for category in Category::ALL {
            println!(
                "    {:?}: {}",
                category,
                catalog.by_category(category).count()
            );
        }
        let secret = catalog.iter().filter(|d| d.secret).count();
        println!("  {secret} secret definitions");
    }

    results
}

// ── 2. Treasure Catalog ─────────────────────────────────────────────────

fn validate_loot_catalog(_verbose: bool) -> Vec<TestResult> {
    println!("--- Treasure Catalog ---");
    let mut results = Vec::new();
    let catalog = LootCatalog::builtin();

    for rarity in LootRarity::ALL {
        let pool = catalog.pool(rarity);
        results.push(TestResult {
            name: format!("loot_pool_{rarity:?}"),
            passed: !pool.is_empty(),
            detail: format!("{} items", pool.len()),
        });
    }

    let non_legendary_exclusive = catalog
        .iter()
        .filter(|i| i.map_exclusive && i.rarity != LootRarity::Legendary)
        .count();
    results.push(TestResult {
        name: "loot_map_exclusive_is_legendary".into(),
        passed: non_legendary_exclusive == 0,
        detail: format!("{non_legendary_exclusive} non-legendary map-exclusive items"),
    });

    results
}

// ── 3. Currency Conversion ──────────────────────────────────────────────

fn validate_currency(_verbose: bool) -> Vec<TestResult> {
    println!("--- Currency Conversion ---");
    let mut results = Vec::new();

    let bones_cases = [
        (0.0, 0),
        (0.04, 0),
        (0.05, 1),
        (0.09, 1),
        (2.3, 23),
        (6.0, 60),
        (10.55, 105),
    ];
    let bones_ok = bones_cases
        .iter()
        .all(|&(km, expected)| bones_for_distance(km) == expected);
    results.push(TestResult {
        name: "currency_bones_table".into(),
        passed: bones_ok,
        detail: format!("{} distance→bones cases", bones_cases.len()),
    });

    // Bones are monotone in distance across a fine sweep
    let mut monotone = true;
    let mut prev = 0u32;
    for step in 0..=2000 {
        let bones = bones_for_distance(f64::from(step) * 0.01);
        if bones < prev {
            monotone = false;
            break;
        }
        prev = bones;
    }
    results.push(TestResult {
        name: "currency_bones_monotone".into(),
        passed: monotone,
        detail: "0.00–20.00 km sweep in 10 m steps".into(),
    });

    let trial_cases = [(0.0, 0), (0.5, 0), (0.51, 1), (2.6, 2), (4.6, 3), (10.0, 5)];
    let trials_ok = trial_cases
        .iter()
        .all(|&(km, expected)| loot_trials(km) == expected);
    results.push(TestResult {
        name: "currency_loot_trials_table".into(),
        passed: trials_ok,
        detail: format!("{} distance→trials cases", trial_cases.len()),
    });

    results
}

// ── 4. Streak Machines ──────────────────────────────────────────────────

fn validate_streaks(_verbose: bool) -> Vec<TestResult> {
    println!("--- Streak Machines ---");
    let mut results = Vec::new();
    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    // Daily: 5-day run, a repeat, a gap, then recovery
    let mut daily = DailyStreak::default();
    for d in 1..=5 {
        daily.check_in(day(2026, 3, d));
    }
    daily.check_in(day(2026, 3, 5)); // same-day repeat
    let run_of_five = daily.current == 5 && daily.best == 5;
    daily.check_in(day(2026, 3, 9)); // gap
    let reset = daily.current == 1 && daily.best == 5;
    results.push(TestResult {
        name: "streak_daily_machine".into(),
        passed: run_of_five && reset,
        detail: format!("current={} best={}", daily.current, daily.best),
    });

    // Weekend: both weekend days count, a skipped weekend resets
    let mut weekend = WeekendStreak::default();
    weekend.check_in(day(2026, 3, 7)); // Sat
    weekend.check_in(day(2026, 3, 8)); // Sun, same weekend
    weekend.check_in(day(2026, 3, 14)); // next Sat
    let extended = weekend.count == 3;
    weekend.check_in(day(2026, 3, 28)); // skipped a weekend
    results.push(TestResult {
        name: "streak_weekend_machine".into(),
        passed: extended && weekend.count == 1,
        detail: format!("count after skip: {}", weekend.count),
    });

    results
}

// ── 5. Windows & Pace ───────────────────────────────────────────────────

fn validate_windows_and_pace(_verbose: bool) -> Vec<TestResult> {
    println!("--- Windows & Pace ---");
    let mut results = Vec::new();

    // A wrapping window covers exactly its hours and no others
    let in_wrap: Vec<u32> = (0..24).filter(|&h| hour_in_window(h, 23, 2)).collect();
    results.push(TestResult {
        name: "window_midnight_wrap".into(),
        passed: in_wrap == [0, 1, 23],
        detail: format!("23→2 covers hours {in_wrap:?}"),
    });

    // A plain window is half-open
    let in_plain: Vec<u32> = (0..24).filter(|&h| hour_in_window(h, 4, 6)).collect();
    results.push(TestResult {
        name: "window_half_open".into(),
        passed: in_plain == [4, 5],
        detail: format!("4→6 covers hours {in_plain:?}"),
    });

    // Pace band is inclusive at both edges and resets outside
    let band_ok = next_steady_run(2, 4.0) == 3
        && next_steady_run(2, 6.0) == 3
        && next_steady_run(2, 3.9) == 0
        && next_steady_run(2, 6.1) == 0;
    results.push(TestResult {
        name: "pace_band_edges".into(),
        passed: band_ok,
        detail: "4.0 and 6.0 km/h extend, outside resets".into(),
    });

    results
}

// ── 6. Loot Distribution ────────────────────────────────────────────────

fn validate_loot_distribution(verbose: bool) -> Vec<TestResult> {
    println!("--- Loot Distribution ---");
    let mut results = Vec::new();
    let catalog = LootCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(2026);

    // Tier shares over many single-trial walks
    const ROLLS: u32 = 20_000;
    let mut drops = 0u32;
    let mut tiers = [0u32; 4];
    for _ in 0..ROLLS {
        // 1 km: exactly one trial per walk
        for item in roll_loot(1.0, &catalog, &mut rng) {
            drops += 1;
            let idx = LootRarity::ALL
                .iter()
                .position(|&r| r == item.rarity)
                .unwrap();
            tiers[idx] += 1;
        }
    }

    let drop_rate = f64::from(drops) / f64::from(ROLLS);
    results.push(TestResult {
        name: "loot_drop_rate".into(),
        passed: (drop_rate - DROP_CHANCE).abs() < 0.02,
        detail: format!("observed {drop_rate:.3}, expected {DROP_CHANCE}"),
    });

    let expected_shares = [0.50, 0.35, 0.14, 0.01];
    for (i, rarity) in LootRarity::ALL.iter().enumerate() {
        let share = f64::from(tiers[i]) / f64::from(drops.max(1));
        results.push(TestResult {
            name: format!("loot_share_{rarity:?}"),
            passed: (share - expected_shares[i]).abs() < 0.02,
            detail: format!("observed {share:.3}, expected {:.2}", expected_shares[i]),
        });
    }

    // The boundary mapping agrees with the shares
    let boundary_ok = tier_for_roll(0.49) == LootRarity::Common
        && tier_for_roll(0.50) == LootRarity::Uncommon
        && tier_for_roll(0.99) == LootRarity::Legendary;
    results.push(TestResult {
        name: "loot_tier_boundaries".into(),
        passed: boundary_ok,
        detail: "0.49/0.50/0.99 map to common/uncommon/legendary".into(),
    });

    if verbose {
        println!("  Tier counts over {drops} drops:");
        for (i, rarity) in LootRarity::ALL.iter().enumerate() {
            println!("    {:?}: {}", rarity, tiers[i]);
        }
    }

    results
}

// ── 7. Walk Month Simulation ────────────────────────────────────────────

fn walk_on(day: NaiveDate, hour: u32, distance_km: f64) -> SessionFact {
    SessionFact {
        session_id: Uuid::new_v4(),
        distance_km,
        duration_secs: distance_km / 5.0 * 3600.0,
        start_time: day.and_hms_opt(hour, 0, 0).unwrap(),
        average_speed_kmh: 5.0,
        weather: None,
        passed_restaurant_count: 0,
        home_loop_count: 0,
        max_distance_from_start_km: distance_km / 2.0,
        spin_count: 0,
        is_closed_loop: false,
        return_speed_ratio: 1.0,
    }
}

fn simulate_walk_month(verbose: bool) -> Vec<TestResult> {
    println!("--- Walk Month Simulation ---");
    let mut results = Vec::new();
    let engine = Orchestrator::standard();
    let mut state = ProgressState::default();
    let mut rng = StdRng::seed_from_u64(7);
    let landmarks = LandmarkCounts::default();

    // Every day of June 2026, 3 km at a steady pace, one rainy evening.
    let mut credited = 0u32;
    let mut last_fact = None;
    for d in 1..=30 {
        let day = NaiveDate::from_ymd_opt(2026, 6, d).unwrap();
        let mut fact = walk_on(day, if d == 12 { 22 } else { 9 }, 3.0);
        if d == 20 {
            fact.weather = Some(Weather {
                condition: "rainy".into(),
                temperature_c: 14.0,
            });
        }
        let outcome = engine.evaluate(&fact, &landmarks, &mut state, &mut rng);
        credited += outcome.bones_awarded;
        last_fact = Some(fact);
    }

    results.push(TestResult {
        name: "month_totals".into(),
        passed: state.total_walks == 30
            && (state.total_distance_km - 90.0).abs() < 1e-9
            && state.streak.current == 30,
        detail: format!(
            "{} walks, {:.1} km, streak {}",
            state.total_walks, state.total_distance_km, state.streak.current
        ),
    });

    let expected_unlocks = [
        "frequency_1",
        "frequency_10",
        "distance_1",
        "distance_10",
        "distance_50",
        "streak_3",
        "streak_7",
        "streak_30",
        "performance_steady_5",
        "environment_night_owl",
        "environment_rainy",
        "environment_weekend_4",
    ];
    let missing: Vec<_> = expected_unlocks
        .iter()
        .filter(|id| !state.is_unlocked(id))
        .collect();
    results.push(TestResult {
        name: "month_unlocks".into(),
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            format!("{} unlocks including {:?}", state.unlocked.len(), "streak_30")
        } else {
            format!("missing {missing:?}")
        },
    });

    results.push(TestResult {
        name: "month_bones_ledger".into(),
        passed: state.bones == credited,
        detail: format!("balance {} == credited {}", state.bones, credited),
    });

    // Progress bars agree with the state
    let catalog = engine.catalog();
    let d100 = catalog.lookup("distance_100").unwrap();
    let pct = progress_percentage(d100, &state, &landmarks);
    results.push(TestResult {
        name: "month_progress_bar".into(),
        passed: (pct - 0.9).abs() < 1e-9,
        detail: format!("distance_100 at {:.0}%", pct * 100.0),
    });

    // Snapshot round trip, then replay the last walk against the restore
    let json = to_json(&state).expect("snapshot serializes");
    let mut restored = from_json(&json).expect("snapshot parses");
    let replay = engine.evaluate(&last_fact.unwrap(), &landmarks, &mut restored, &mut rng);
    results.push(TestResult {
        name: "month_replay_is_no_op".into(),
        passed: replay.already_evaluated && restored == state,
        detail: "restored state ignores a resubmitted walk".into(),
    });

    if verbose {
        println!("  Final balance: {} bones", state.bones);
        println!("  Unlocked: {:?}", state.unlocked);
    }

    results
}

// ── 8. Hint Shop ────────────────────────────────────────────────────────

fn validate_hint_shop(_verbose: bool) -> Vec<TestResult> {
    println!("--- Hint Shop ---");
    let mut results = Vec::new();
    let catalog = AchievementCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(13);

    // A broke user cannot draw, and the state stays untouched
    let mut broke = ProgressState::default();
    let err = hints::draw_random_hint(&catalog, &mut broke, &mut rng);
    results.push(TestResult {
        name: "hint_broke_user_rejected".into(),
        passed: matches!(err, Err(HintError::InsufficientBones { .. }))
            && broke.hints_revealed.is_empty(),
        detail: format!("{err:?}"),
    });

    // A funded user can drain every secret achievement exactly once
    let secret_count = catalog.iter().filter(|d| d.secret).count();
    let mut funded = ProgressState::default();
    funded.credit_bones(secret_count as u32 * hints::RANDOM_HINT_COST);
    let mut revealed = 0;
    while hints::draw_random_hint(&catalog, &mut funded, &mut rng).is_ok() {
        revealed += 1;
    }
    results.push(TestResult {
        name: "hint_pool_drains".into(),
        passed: revealed == secret_count && funded.bones == 0,
        detail: format!(
            "{revealed}/{secret_count} secrets revealed, {} bones left",
            funded.bones
        ),
    });

    results
}
