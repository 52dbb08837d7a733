//! Per-walk evaluation sequencing.
//!
//! The orchestrator is the only writer of the progress state during
//! evaluation. For each walk it folds the totals in, advances the daily
//! streak, runs the seven evaluators in fixed category order, applies
//! their mutations, credits unlock rewards, and finally credits the
//! distance bones and rolls loot. Callers invoke it once per completed
//! walk and persist the state afterwards; a repeated submission of the
//! same walk (same `session_id`) is a strict no-op.

use rand::Rng;

use pawtrail_logic::currency::bones_for_distance;

use crate::catalog::{AchievementCatalog, AchievementDefinition, Category};
use crate::economy::roll_loot;
use crate::evaluators::{EvalContext, EvaluatorRegistry};
use crate::loot::{LootCatalog, LootItem};
use crate::session::{LandmarkCounts, SessionFact};
use crate::store::ProgressState;

/// What one evaluation produced, for the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Achievements unlocked by this walk, in evaluation order.
    pub newly_unlocked: Vec<AchievementDefinition>,
    /// Total bones credited by this call: unlock rewards plus distance
    /// bones.
    pub bones_awarded: u32,
    /// Treasure dropped on this walk.
    pub loot: Vec<LootItem>,
    /// True when this walk was already evaluated and nothing changed.
    pub already_evaluated: bool,
}

/// Sequences one walk through totals, streak, evaluators, and economy.
pub struct Orchestrator {
    catalog: AchievementCatalog,
    loot: LootCatalog,
    registry: EvaluatorRegistry,
}

impl Orchestrator {
    /// Engine with the built-in catalogs and the standard evaluators.
    pub fn standard() -> Self {
        Self::new(
            AchievementCatalog::builtin(),
            LootCatalog::builtin(),
            EvaluatorRegistry::standard(),
        )
    }

    pub fn new(catalog: AchievementCatalog, loot: LootCatalog, registry: EvaluatorRegistry) -> Self {
        Self {
            catalog,
            loot,
            registry,
        }
    }

    pub fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    pub fn loot_catalog(&self) -> &LootCatalog {
        &self.loot
    }

    /// Fold one completed walk into the progress state.
    ///
    /// `landmarks` is the caller's fresh query of the landmark
    /// collaborator. The RNG drives the loot rolls only; everything else
    /// is deterministic in the inputs.
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        fact: &SessionFact,
        landmarks: &LandmarkCounts,
        state: &mut ProgressState,
        rng: &mut R,
    ) -> WalkOutcome {
        if state.last_session == Some(fact.session_id) {
            tracing::debug!(session = %fact.session_id, "walk already evaluated, skipping");
            return WalkOutcome {
                already_evaluated: true,
                ..WalkOutcome::default()
            };
        }
        state.last_session = Some(fact.session_id);

        state.total_walks += 1;
        state.total_distance_km += fact.distance_km;
        state.streak.check_in(fact.start_day());

        // Evaluators see the post-total, pre-unlock state.
        let snapshot = state.clone();
        let mut newly_unlocked = Vec::new();
        let mut bones_awarded = 0u32;

        for category in Category::ALL {
            let Some(evaluator) = self.registry.get(category) else {
                continue;
            };
            let result = evaluator.evaluate(&EvalContext {
                fact,
                state: &snapshot,
                landmarks,
                catalog: &self.catalog,
            });
            for mutation in result.mutations {
                mutation.apply(state);
            }
            for id in result.unlocked {
                // An id the catalog does not know earns nothing.
                let Some(def) = self.catalog.lookup(id) else {
                    continue;
                };
                if state.mark_unlocked(def.id) {
                    state.credit_bones(def.reward_bones);
                    bones_awarded += def.reward_bones;
                    newly_unlocked.push(*def);
                    tracing::debug!(id = def.id, "achievement unlocked");
                }
            }
        }

        let distance_bones = bones_for_distance(fact.distance_km);
        state.credit_bones(distance_bones);
        bones_awarded += distance_bones;

        let loot = roll_loot(fact.distance_km, &self.loot, rng);

        WalkOutcome {
            newly_unlocked,
            bones_awarded,
            loot,
            already_evaluated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn fact_on(day: NaiveDate, distance_km: f64) -> SessionFact {
        SessionFact {
            session_id: Uuid::new_v4(),
            distance_km,
            duration_secs: 1200.0,
            start_time: day.and_hms_opt(10, 0, 0).unwrap(),
            average_speed_kmh: 18.0,
            weather: None,
            passed_restaurant_count: 0,
            home_loop_count: 0,
            max_distance_from_start_km: 1.0,
            spin_count: 0,
            is_closed_loop: false,
            return_speed_ratio: 1.0,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fresh_state_six_km_scenario() {
        let engine = Orchestrator::standard();
        let mut state = ProgressState::default();
        let mut rng = StdRng::seed_from_u64(1);
        let fact = fact_on(day(2026, 3, 10), 6.0);

        let outcome = engine.evaluate(&fact, &LandmarkCounts::default(), &mut state, &mut rng);

        assert_eq!(state.total_walks, 1);
        assert_eq!(state.total_distance_km, 6.0);
        assert_eq!(state.streak.current, 1);

        let ids: Vec<_> = outcome.newly_unlocked.iter().map(|d| d.id).collect();
        assert!(ids.contains(&"performance_long_walk"));
        assert!(ids.contains(&"distance_1")); // 6 km total
        assert!(ids.contains(&"frequency_1"));
        assert!(ids.contains(&"performance_speed_fast")); // 18 km/h

        // Distance bones plus each unlock's reward, all credited.
        let unlock_bones: u32 = outcome.newly_unlocked.iter().map(|d| d.reward_bones).sum();
        assert_eq!(outcome.bones_awarded, unlock_bones + 60);
        assert_eq!(state.bones, outcome.bones_awarded);
    }

    #[test]
    fn test_resubmitting_the_same_walk_is_a_no_op() {
        let engine = Orchestrator::standard();
        let mut state = ProgressState::default();
        let mut rng = StdRng::seed_from_u64(1);
        let fact = fact_on(day(2026, 3, 10), 6.0);

        engine.evaluate(&fact, &LandmarkCounts::default(), &mut state, &mut rng);
        let before = state.clone();

        let second = engine.evaluate(&fact, &LandmarkCounts::default(), &mut state, &mut rng);
        assert!(second.already_evaluated);
        assert!(second.newly_unlocked.is_empty());
        assert_eq!(second.bones_awarded, 0);
        assert!(second.loot.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_unlocked_ids_never_unlock_twice() {
        let engine = Orchestrator::standard();
        let mut state = ProgressState::default();
        let mut rng = StdRng::seed_from_u64(1);

        let first = engine.evaluate(
            &fact_on(day(2026, 3, 10), 6.0),
            &LandmarkCounts::default(),
            &mut state,
            &mut rng,
        );
        let first_ids: Vec<_> = first.newly_unlocked.iter().map(|d| d.id).collect();
        assert!(first_ids.contains(&"performance_long_walk"));

        // A different walk the next day, same profile: totals move, but
        // the already-unlocked ids stay unlocked exactly once.
        let second = engine.evaluate(
            &fact_on(day(2026, 3, 11), 6.0),
            &LandmarkCounts::default(),
            &mut state,
            &mut rng,
        );
        let second_ids: Vec<_> = second.newly_unlocked.iter().map(|d| d.id).collect();
        assert!(!second_ids.contains(&"performance_long_walk"));
        assert!(!second_ids.contains(&"frequency_1"));
        assert_eq!(state.total_walks, 2);
        assert_eq!(state.streak.current, 2);
    }

    #[test]
    fn test_streak_transitions_across_walks() {
        let engine = Orchestrator::standard();
        let mut state = ProgressState::default();
        let mut rng = StdRng::seed_from_u64(1);
        let landmarks = LandmarkCounts::default();

        engine.evaluate(&fact_on(day(2026, 3, 10), 1.0), &landmarks, &mut state, &mut rng);
        assert_eq!(state.streak.current, 1);

        // Same day again (different session): streak unchanged.
        engine.evaluate(&fact_on(day(2026, 3, 10), 1.0), &landmarks, &mut state, &mut rng);
        assert_eq!(state.streak.current, 1);

        engine.evaluate(&fact_on(day(2026, 3, 11), 1.0), &landmarks, &mut state, &mut rng);
        assert_eq!(state.streak.current, 2);

        engine.evaluate(&fact_on(day(2026, 3, 14), 1.0), &landmarks, &mut state, &mut rng);
        assert_eq!(state.streak.current, 1);
        assert_eq!(state.streak.best, 2);
    }

    #[test]
    fn test_short_walk_earns_nothing() {
        let engine = Orchestrator::standard();
        let mut state = ProgressState::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut fact = fact_on(day(2026, 3, 10), 0.04);
        fact.average_speed_kmh = 1.0;

        let outcome = engine.evaluate(&fact, &LandmarkCounts::default(), &mut state, &mut rng);
        // No distance bones, no loot; frequency_1 still unlocks.
        assert!(outcome.loot.is_empty());
        let ids: Vec<_> = outcome.newly_unlocked.iter().map(|d| d.id).collect();
        assert_eq!(ids, ["frequency_1"]);
        assert_eq!(outcome.bones_awarded, 5);
    }
}
