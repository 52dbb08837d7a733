//! Time-of-day, weather, and weekend achievements.

use pawtrail_logic::weekend::is_weekend;
use pawtrail_logic::window::hour_in_window;

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator, StateMutation};
use crate::catalog::{AchievementDefinition, Category};
use crate::session::SessionFact;

/// Checks when and in what weather a walk happened.
///
/// Weather-gated definitions combine a condition string, strict temperature
/// bounds, an optional minimum duration, and an optional start-hour window;
/// all set parameters must hold. Definitions with only a window are plain
/// time-of-day checks. The one definition with no parameters is the
/// consecutive-weekend counter, advanced here for Saturday/Sunday walks.
pub struct EnvironmentEvaluator;

impl RuleEvaluator for EnvironmentEvaluator {
    fn category(&self) -> Category {
        Category::Environment
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let fact = ctx.fact;
        let hour = fact.start_hour();

        let mut mutations = Vec::new();
        let walked_weekend = is_weekend(fact.start_day());
        let weekend_count = if walked_weekend {
            let mut weekend = ctx.state.weekend.clone();
            weekend.check_in(fact.start_day());
            let count = weekend.count;
            mutations.push(StateMutation::SetWeekendStreak(weekend));
            count
        } else {
            0
        };

        let unlocked = unlock_where(ctx, Category::Environment, |def| {
            if has_weather_gate(def) {
                weather_gate_holds(def, fact, hour)
            } else if let Some((start, end)) = def.time_range {
                hour_in_window(hour, start, end)
            } else {
                // Consecutive-weekend achievement: only a weekend walk can
                // complete the run.
                walked_weekend && weekend_count >= def.requirement
            }
        });

        Evaluation { unlocked, mutations }
    }
}

fn has_weather_gate(def: &AchievementDefinition) -> bool {
    def.weather_condition.is_some()
        || def.temperature_min_c.is_some()
        || def.temperature_max_c.is_some()
}

fn weather_gate_holds(def: &AchievementDefinition, fact: &SessionFact, hour: u32) -> bool {
    let Some(weather) = &fact.weather else {
        return false;
    };
    if let Some(condition) = def.weather_condition {
        if weather.condition != condition {
            return false;
        }
    }
    if let Some(min) = def.temperature_min_c {
        if weather.temperature_c <= min {
            return false;
        }
    }
    if let Some(max) = def.temperature_max_c {
        if weather.temperature_c >= max {
            return false;
        }
    }
    if let Some(min_dur) = def.min_duration_secs {
        if fact.duration_secs < min_dur {
            return false;
        }
    }
    if let Some((start, end)) = def.time_range {
        if !hour_in_window(hour, start, end) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::super::test_support::plain_fact;
    use super::*;
    use crate::catalog::AchievementCatalog;
    use crate::session::{LandmarkCounts, Weather};
    use crate::store::ProgressState;
    use chrono::NaiveDate;
    use pawtrail_logic::weekend::WeekendStreak;

    fn run(fact: &SessionFact, state: &ProgressState) -> Evaluation {
        let catalog = AchievementCatalog::builtin();
        let landmarks = LandmarkCounts::default();
        EnvironmentEvaluator.evaluate(&EvalContext {
            fact,
            state,
            landmarks: &landmarks,
            catalog: &catalog,
        })
    }

    fn at_hour(hour: u32) -> SessionFact {
        let mut fact = plain_fact();
        fact.start_time = NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap();
        fact
    }

    #[test]
    fn test_dawn_window() {
        let result = run(&at_hour(4), &ProgressState::default());
        assert!(result.unlocked.contains(&"environment_rooster"));
        assert!(result.unlocked.contains(&"environment_early_bird"));
    }

    #[test]
    fn test_midnight_wrap_window() {
        for hour in [23, 0, 1] {
            let result = run(&at_hour(hour), &ProgressState::default());
            assert!(
                result.unlocked.contains(&"environment_dark_knight"),
                "hour {hour} should qualify"
            );
        }
        for hour in [3, 22] {
            let result = run(&at_hour(hour), &ProgressState::default());
            assert!(
                !result.unlocked.contains(&"environment_dark_knight"),
                "hour {hour} should not qualify"
            );
        }
    }

    #[test]
    fn test_night_owl() {
        let result = run(&at_hour(22), &ProgressState::default());
        assert!(result.unlocked.contains(&"environment_night_owl"));
        assert!(!result.unlocked.contains(&"environment_dark_knight"));
    }

    #[test]
    fn test_daytime_walk_unlocks_nothing() {
        let result = run(&at_hour(10), &ProgressState::default());
        assert!(result.unlocked.is_empty());
    }

    #[test]
    fn test_rainy_walk_needs_duration() {
        let mut fact = at_hour(10);
        fact.weather = Some(Weather {
            condition: "rainy".into(),
            temperature_c: 12.0,
        });
        fact.duration_secs = 1000.0;
        let result = run(&fact, &ProgressState::default());
        assert!(result.unlocked.contains(&"environment_rainy"));

        fact.duration_secs = 600.0;
        let result = run(&fact, &ProgressState::default());
        assert!(!result.unlocked.contains(&"environment_rainy"));
    }

    #[test]
    fn test_frozen_walk_is_strictly_below_bound() {
        let mut fact = at_hour(10);
        fact.weather = Some(Weather {
            condition: "snowy".into(),
            temperature_c: -6.0,
        });
        let result = run(&fact, &ProgressState::default());
        assert!(result.unlocked.contains(&"environment_frozen"));

        fact.weather = Some(Weather {
            condition: "snowy".into(),
            temperature_c: -5.0,
        });
        let result = run(&fact, &ProgressState::default());
        assert!(!result.unlocked.contains(&"environment_frozen"));
    }

    #[test]
    fn test_heat_wave_needs_evening_window() {
        let mut fact = at_hour(18);
        fact.weather = Some(Weather {
            condition: "sunny".into(),
            temperature_c: 36.0,
        });
        let result = run(&fact, &ProgressState::default());
        assert!(result.unlocked.contains(&"environment_summer"));

        let mut fact = at_hour(12);
        fact.weather = Some(Weather {
            condition: "sunny".into(),
            temperature_c: 36.0,
        });
        let result = run(&fact, &ProgressState::default());
        assert!(!result.unlocked.contains(&"environment_summer"));
    }

    #[test]
    fn test_no_weather_report_blocks_weather_gates() {
        let mut fact = at_hour(18);
        fact.weather = None;
        let result = run(&fact, &ProgressState::default());
        assert!(!result.unlocked.contains(&"environment_rainy"));
        assert!(!result.unlocked.contains(&"environment_frozen"));
    }

    #[test]
    fn test_weekend_walk_advances_the_run() {
        // 2026-03-14 is a Saturday.
        let mut fact = plain_fact();
        fact.start_time = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut state = ProgressState::default();
        state.weekend = WeekendStreak {
            count: 3,
            last_day: NaiveDate::from_ymd_opt(2026, 3, 8),
        };

        let result = run(&fact, &state);
        assert!(result.unlocked.contains(&"environment_weekend_4"));
        let expected = WeekendStreak {
            count: 4,
            last_day: NaiveDate::from_ymd_opt(2026, 3, 14),
        };
        assert!(result
            .mutations
            .contains(&StateMutation::SetWeekendStreak(expected)));
    }

    #[test]
    fn test_weekday_walk_leaves_weekend_run_alone() {
        let mut state = ProgressState::default();
        state.weekend.count = 4;
        let result = run(&at_hour(10), &state); // Tuesday
        assert!(result.mutations.is_empty());
        assert!(!result.unlocked.contains(&"environment_weekend_4"));
    }
}
