//! Achievement definitions and the built-in catalog.
//!
//! The catalog is an immutable table loaded once at startup. Definitions
//! carry their unlock threshold (`requirement`) plus optional trigger
//! parameters whose meaning depends on the category; the evaluators in
//! [`crate::evaluators`] interpret them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Achievement category. Also the fixed evaluation order across a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Cumulative kilometres walked.
    Distance,
    /// Cumulative walk count.
    Frequency,
    /// Consecutive check-in days.
    Streak,
    /// Landmark/POI visits reported by the landmark collaborator.
    Landmark,
    /// Speed and intensity of a single walk.
    Performance,
    /// Time of day, weather, and weekend patterns.
    Environment,
    /// Trajectory quirks and long-run companionship.
    Context,
}

impl Category {
    /// All categories in evaluation order.
    pub const ALL: [Category; 7] = [
        Category::Distance,
        Category::Frequency,
        Category::Streak,
        Category::Landmark,
        Category::Performance,
        Category::Environment,
        Category::Context,
    ];
}

/// How rare an achievement is, for display and hint-shop grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Which landmark-collaborator counter a landmark achievement reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkScope {
    /// Distinct parks visited.
    Parks,
    /// Distinct landmarks of any kind.
    AllDistinct,
    /// Most visits to any single spot.
    SameSpot,
}

/// One immutable achievement definition.
///
/// `requirement` is the unlock threshold; its unit depends on the category
/// (kilometres, walks, days, visits, runs, weekends, or hours). The
/// optional fields are per-walk trigger parameters; unset fields simply do
/// not constrain the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub requirement: u32,
    /// Bones credited when the achievement unlocks.
    pub reward_bones: u32,
    /// Secret achievements show as "???" until unlocked or hint-revealed.
    pub secret: bool,
    pub rarity: AchievementRarity,
    pub landmark_scope: Option<LandmarkScope>,
    /// Minimum average speed over the walk, km/h.
    pub speed_threshold_kmh: Option<f64>,
    /// Minimum walk duration, seconds.
    pub min_duration_secs: Option<f64>,
    /// Distance the walk must stay under, km.
    pub max_distance_km: Option<f64>,
    /// Distance the walk must reach, km.
    pub min_distance_km: Option<f64>,
    /// Required weather condition string ("rainy", "snowy", ...).
    pub weather_condition: Option<&'static str>,
    /// Temperature must be strictly above this, °C.
    pub temperature_min_c: Option<f64>,
    /// Temperature must be strictly below this, °C.
    pub temperature_max_c: Option<f64>,
    /// Start-hour window `[start, end)`; wraps past midnight when
    /// `start > end`.
    pub time_range: Option<(u32, u32)>,
}

impl AchievementDefinition {
    /// A definition with every optional trigger parameter unset.
    fn base(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        requirement: u32,
        reward_bones: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            requirement,
            reward_bones,
            secret: false,
            rarity: AchievementRarity::Common,
            landmark_scope: None,
            speed_threshold_kmh: None,
            min_duration_secs: None,
            max_distance_km: None,
            min_distance_km: None,
            weather_condition: None,
            temperature_min_c: None,
            temperature_max_c: None,
            time_range: None,
        }
    }
}

/// Immutable lookup table of all achievement definitions.
pub struct AchievementCatalog {
    defs: Vec<AchievementDefinition>,
    index: HashMap<&'static str, usize>,
}

impl AchievementCatalog {
    /// The built-in achievement table.
    pub fn builtin() -> Self {
        Self::from_defs(builtin_defs())
    }

    /// Build a catalog from explicit definitions. Ids must be unique.
    pub fn from_defs(defs: Vec<AchievementDefinition>) -> Self {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            let previous = index.insert(def.id, i);
            assert!(previous.is_none(), "duplicate achievement id {:?}", def.id);
        }
        Self { defs, index }
    }

    /// Look up a definition by id. Unknown ids are `None`, never a panic.
    pub fn lookup(&self, id: &str) -> Option<&AchievementDefinition> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    /// Definitions of one category, in catalog declaration order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &AchievementDefinition> + '_ {
        self.defs.iter().filter(move |d| d.category == category)
    }

    /// All definitions, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AchievementDefinition> + '_ {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// The shipped achievement table.
fn builtin_defs() -> Vec<AchievementDefinition> {
    use AchievementRarity::{Epic, Legendary, Rare};
    use Category::{Context, Distance, Environment, Frequency, Landmark, Performance, Streak};

    type Def = AchievementDefinition;
    vec![
        // ── Distance: cumulative kilometres ─────────────────────────────
        Def::base(
            "distance_1",
            "First Steps",
            "Walk a cumulative 1 km. The journey begins!",
            Distance,
            1,
            10,
        ),
        Def::base(
            "distance_10",
            "Block Patroller",
            "Walk a cumulative 10 km. Every corner of the block knows you two.",
            Distance,
            10,
            30,
        ),
        Def::base(
            "distance_50",
            "Street Explorer",
            "Walk a cumulative 50 km. The nearby streets hold no secrets.",
            Distance,
            50,
            80,
        ),
        Def::base(
            "distance_100",
            "City Wanderer",
            "Walk a cumulative 100 km. The city is brighter for it.",
            Distance,
            100,
            150,
        ),
        Def::base(
            "distance_42",
            "Marathon Pair",
            "Walk a cumulative 42.195 km. You and the dog just finished a marathon without noticing.",
            Distance,
            42,
            150,
        ),
        Def::base(
            "distance_500",
            "Long Hauler",
            "Walk a cumulative 500 km. A serious stretch of road.",
            Distance,
            500,
            500,
        ),
        Def {
            secret: true,
            rarity: Legendary,
            ..Def::base(
                "distance_1000",
                "Thousand-Kilometer Club",
                "Walk a cumulative 1000 km. An epic journey, one leash-length at a time.",
                Distance,
                1000,
                1000,
            )
        },
        // ── Frequency: cumulative walk count ────────────────────────────
        Def::base(
            "frequency_1",
            "First Outing",
            "Complete your very first walk.",
            Frequency,
            1,
            5,
        ),
        Def::base(
            "frequency_10",
            "Habit Forming",
            "Complete 10 walks. Walking the dog is part of the day now.",
            Frequency,
            10,
            25,
        ),
        Def::base(
            "frequency_50",
            "Seasoned Walker",
            "Complete 50 walks. You could do this route blindfolded.",
            Frequency,
            50,
            100,
        ),
        Def::base(
            "frequency_100",
            "Century of Walks",
            "Complete 100 walks. Thank you for all the company!",
            Frequency,
            100,
            200,
        ),
        // ── Streak: consecutive check-in days ───────────────────────────
        Def::base(
            "streak_3",
            "Three-Day Run",
            "Walk on 3 consecutive days. Keep it going!",
            Streak,
            3,
            15,
        ),
        Def::base(
            "streak_7",
            "One-Week Run",
            "Walk on 7 consecutive days. A whole week of dedication.",
            Streak,
            7,
            50,
        ),
        Def::base(
            "streak_30",
            "Monthly Devotion",
            "Walk on 30 consecutive days. Remarkable persistence!",
            Streak,
            30,
            200,
        ),
        Def {
            secret: true,
            rarity: Epic,
            ..Def::base(
                "streak_100",
                "Hundred-Day Bond",
                "Walk on 100 consecutive days. An unbreakable bond.",
                Streak,
                100,
                500,
            )
        },
        // ── Landmark: collaborator-reported visit counters ──────────────
        Def {
            landmark_scope: Some(LandmarkScope::Parks),
            ..Def::base(
                "landmark_park_1",
                "Park Debut",
                "Visit a park during a walk.",
                Landmark,
                1,
                20,
            )
        },
        Def {
            landmark_scope: Some(LandmarkScope::Parks),
            ..Def::base(
                "landmark_park_5",
                "Park Patroller",
                "Visit 5 different parks.",
                Landmark,
                5,
                80,
            )
        },
        Def {
            landmark_scope: Some(LandmarkScope::AllDistinct),
            ..Def::base(
                "landmark_all_10",
                "Landmark Hunter",
                "Check in at 10 different landmarks.",
                Landmark,
                10,
                150,
            )
        },
        Def {
            landmark_scope: Some(LandmarkScope::SameSpot),
            ..Def::base(
                "landmark_home_30",
                "Neighborhood Guardian",
                "Walk at the same spot 30 times.",
                Landmark,
                30,
                100,
            )
        },
        // ── Performance: speed and intensity of one walk ────────────────
        Def {
            secret: true,
            rarity: Rare,
            speed_threshold_kmh: Some(8.0),
            ..Def::base(
                "performance_speed_fast",
                "Lightning Hound",
                "Average more than 8 km/h on a single walk. Run fast enough and loneliness can't keep up.",
                Performance,
                8,
                50,
            )
        },
        Def {
            secret: true,
            min_duration_secs: Some(1800.0),
            max_distance_km: Some(0.5),
            ..Def::base(
                "performance_speed_slow",
                "Leisure Pace",
                "Walk for over 30 minutes while covering less than 500 m. Every lamppost deserves attention.",
                Performance,
                1,
                30,
            )
        },
        Def::base(
            "performance_steady_5",
            "Steady Output",
            "Keep your pace between 4 and 6 km/h on 5 walks in a row.",
            Performance,
            5,
            80,
        ),
        Def {
            min_distance_km: Some(5.0),
            ..Def::base(
                "performance_long_walk",
                "Long Trek",
                "Cover more than 5 km on a single walk.",
                Performance,
                5,
                50,
            )
        },
        // ── Environment: time of day, weather, weekends ─────────────────
        Def {
            secret: true,
            rarity: Rare,
            time_range: Some((4, 6)),
            ..Def::base(
                "environment_rooster",
                "Dawn Patrol",
                "Finish a walk started between 4:00 and 6:00. Ever seen the city at four in the morning? Your dog has.",
                Environment,
                1,
                50,
            )
        },
        Def {
            secret: true,
            rarity: Rare,
            time_range: Some((23, 2)),
            ..Def::base(
                "environment_dark_knight",
                "Dark Knight",
                "Walk between 23:00 and 02:00. The silent guardian this city deserves.",
                Environment,
                1,
                50,
            )
        },
        Def {
            time_range: Some((0, 6)),
            ..Def::base(
                "environment_early_bird",
                "Early Bird",
                "Finish a walk before 6 in the morning.",
                Environment,
                1,
                30,
            )
        },
        Def {
            time_range: Some((22, 24)),
            ..Def::base(
                "environment_night_owl",
                "Night Owl",
                "Finish a walk after 10 in the evening.",
                Environment,
                1,
                30,
            )
        },
        Def {
            secret: true,
            rarity: Rare,
            weather_condition: Some("rainy"),
            min_duration_secs: Some(900.0),
            ..Def::base(
                "environment_rainy",
                "Rain or Shine",
                "Walk for over 15 minutes in the rain. Soaked dog, soaked human, high spirits.",
                Environment,
                1,
                60,
            )
        },
        Def {
            secret: true,
            rarity: Epic,
            temperature_max_c: Some(-5.0),
            ..Def::base(
                "environment_frozen",
                "Frost Walker",
                "Walk when it is below -5 °C. No cold can cage a heart that wants out.",
                Environment,
                1,
                80,
            )
        },
        Def {
            secret: true,
            rarity: Rare,
            temperature_min_c: Some(35.0),
            time_range: Some((17, 20)),
            ..Def::base(
                "environment_summer",
                "Heat-Wave Warrior",
                "Head out on an evening hotter than 35 °C.",
                Environment,
                1,
                60,
            )
        },
        Def {
            rarity: Rare,
            ..Def::base(
                "environment_weekend_4",
                "Weekend Regular",
                "Walk on 4 consecutive Saturdays and Sundays.",
                Environment,
                4,
                100,
            )
        },
        // ── Context: trajectory quirks and long-run companionship ───────
        Def {
            secret: true,
            rarity: Rare,
            ..Def::base(
                "context_iron_will",
                "Iron Will",
                "Pass 3 well-rated restaurants without stopping. Calm as still water.",
                Context,
                3,
                60,
            )
        },
        Def {
            secret: true,
            rarity: Epic,
            ..Def::base(
                "context_restaurant_10",
                "Temptation Master",
                "Pass 10 restaurants without stopping. A will of steel.",
                Context,
                10,
                150,
            )
        },
        Def {
            secret: true,
            ..Def::base(
                "context_wanderer",
                "Not Done Yet",
                "Pass near home 3 times without ending the walk. Five more minutes!",
                Context,
                3,
                80,
            )
        },
        Def {
            secret: true,
            ..Def::base(
                "context_dizzy",
                "Dizzy Spells",
                "Circle in place more than 5 times on one walk. Round and round it goes.",
                Context,
                5,
                50,
            )
        },
        Def {
            secret: true,
            rarity: Rare,
            ..Def::base(
                "context_artist",
                "Perfect Circle",
                "Trace a route that closes back on its own start. A circle drawn with four paws.",
                Context,
                1,
                80,
            )
        },
        Def {
            secret: true,
            ..Def::base(
                "context_homing",
                "Homeward Sprint",
                "Return home at more than twice the outbound pace. The food bowl calls.",
                Context,
                1,
                60,
            )
        },
        Def {
            secret: true,
            rarity: Legendary,
            ..Def::base(
                "context_companion_100",
                "Faithful Companion",
                "Reach 100 hours of total walk time. Company is the longest love letter.",
                Context,
                100,
                500,
            )
        },
        Def {
            secret: true,
            rarity: Rare,
            min_distance_km: Some(5.0),
            ..Def::base(
                "context_explorer",
                "Trailblazer",
                "Walk somewhere more than 5 km from your starting point. New lands!",
                Context,
                5,
                80,
            )
        },
        Def {
            secret: true,
            rarity: Epic,
            ..Def::base(
                "context_local_lord",
                "Local Legend",
                "Explore 50 different routes within 1 km of home. The dog knows this turf.",
                Context,
                50,
                200,
            )
        },
        Def {
            secret: true,
            min_duration_secs: Some(1800.0),
            max_distance_km: Some(0.5),
            ..Def::base(
                "context_sniffer",
                "Scent Specialist",
                "Spend over 30 minutes covering less than 500 m. Every lamppost has a story.",
                Context,
                1,
                30,
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        // from_defs panics on duplicates; constructing is the assertion.
        let catalog = AchievementCatalog::builtin();
        assert_eq!(catalog.len(), 41);
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let catalog = AchievementCatalog::builtin();
        let def = catalog.lookup("distance_42").unwrap();
        assert_eq!(def.requirement, 42);
        assert!(catalog.lookup("no_such_achievement").is_none());
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = AchievementCatalog::builtin();
        for category in Category::ALL {
            assert!(
                catalog.by_category(category).count() > 0,
                "category {category:?} has no achievements"
            );
        }
    }

    #[test]
    fn test_by_category_keeps_declaration_order() {
        let catalog = AchievementCatalog::builtin();
        let ids: Vec<_> = catalog.by_category(Category::Streak).map(|d| d.id).collect();
        assert_eq!(ids, ["streak_3", "streak_7", "streak_30", "streak_100"]);
    }

    #[test]
    fn test_landmark_defs_all_have_a_scope() {
        let catalog = AchievementCatalog::builtin();
        for def in catalog.by_category(Category::Landmark) {
            assert!(def.landmark_scope.is_some(), "{} missing scope", def.id);
        }
    }

    #[test]
    fn test_rewards_are_positive() {
        let catalog = AchievementCatalog::builtin();
        for def in catalog.iter() {
            assert!(def.reward_bones > 0, "{} has no reward", def.id);
            assert!(def.requirement > 0, "{} has no requirement", def.id);
        }
    }
}
