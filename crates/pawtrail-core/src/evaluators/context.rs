//! Trajectory-quirk and companionship achievements.

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator, StateMutation};
use crate::catalog::Category;

/// Return-leg pace must be at least this multiple of the outbound pace to
/// count as sprinting home.
pub const HOMEWARD_SPRINT_RATIO: f64 = 2.0;

/// Checks the walk's shape: restaurants passed, spins, loops, the sprint
/// home, how far from the start it went, and the all-time walk-duration
/// total.
///
/// These definitions carry no per-category trigger parameter scheme, so
/// each id maps to its own session-fact field, with the definition's
/// `requirement` as the threshold.
pub struct ContextEvaluator;

impl RuleEvaluator for ContextEvaluator {
    fn category(&self) -> Category {
        Category::Context
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let fact = ctx.fact;
        let total_hours = (ctx.state.walk_duration_secs + fact.duration_secs) / 3600.0;

        let unlocked = unlock_where(ctx, Category::Context, |def| match def.id {
            "context_iron_will" | "context_restaurant_10" => {
                fact.passed_restaurant_count >= def.requirement
            }
            "context_wanderer" => fact.home_loop_count >= def.requirement,
            "context_dizzy" => fact.spin_count >= def.requirement,
            "context_artist" => fact.is_closed_loop,
            "context_homing" => fact.return_speed_ratio >= HOMEWARD_SPRINT_RATIO,
            "context_explorer" => {
                let threshold = def.min_distance_km.unwrap_or(f64::from(def.requirement));
                fact.max_distance_from_start_km >= threshold
            }
            "context_sniffer" => {
                def.min_duration_secs
                    .map_or(false, |min| fact.duration_secs >= min)
                    && def
                        .max_distance_km
                        .map_or(false, |max| fact.distance_km < max)
            }
            "context_companion_100" => total_hours >= f64::from(def.requirement),
            // context_local_lord needs distinct-route counts the walk
            // collaborator does not report yet.
            _ => false,
        });

        Evaluation {
            unlocked,
            mutations: vec![StateMutation::AddWalkDuration(fact.duration_secs)],
        }
    }
}
