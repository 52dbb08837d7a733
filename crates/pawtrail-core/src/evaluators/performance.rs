//! Speed and intensity achievements for a single walk.

use pawtrail_logic::pace::next_steady_run;

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator, StateMutation};
use crate::catalog::Category;

/// Checks a walk's speed profile.
///
/// Definitions are interpreted by their trigger parameters: a speed
/// threshold means a fast walk, a minimum duration with a distance cap
/// means a deliberately slow one, a minimum distance means a long trek.
/// The one definition with no parameters is the steady-output counter,
/// which persists between walks.
pub struct PerformanceEvaluator;

impl RuleEvaluator for PerformanceEvaluator {
    fn category(&self) -> Category {
        Category::Performance
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let fact = ctx.fact;
        let run = next_steady_run(ctx.state.steady_pace_run, fact.average_speed_kmh);

        let unlocked = unlock_where(ctx, Category::Performance, |def| {
            if let Some(threshold) = def.speed_threshold_kmh {
                return fact.average_speed_kmh >= threshold;
            }
            if let (Some(min_dur), Some(max_km)) = (def.min_duration_secs, def.max_distance_km) {
                return fact.duration_secs >= min_dur && fact.distance_km < max_km;
            }
            if let Some(min_km) = def.min_distance_km {
                return fact.distance_km >= min_km;
            }
            run >= def.requirement
        });

        Evaluation {
            unlocked,
            mutations: vec![StateMutation::SetSteadyPaceRun(run)],
        }
    }
}
