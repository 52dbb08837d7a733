//! Cumulative-distance achievements.

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator};
use crate::catalog::Category;

/// Unlocks when total kilometres (truncated to whole km, this walk
/// included) reach a definition's requirement.
pub struct DistanceEvaluator;

impl RuleEvaluator for DistanceEvaluator {
    fn category(&self) -> Category {
        Category::Distance
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let total_km = ctx.state.total_distance_km.trunc() as u32;
        Evaluation {
            unlocked: unlock_where(ctx, Category::Distance, |def| total_km >= def.requirement),
            mutations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::plain_fact;
    use super::*;
    use crate::catalog::AchievementCatalog;
    use crate::session::LandmarkCounts;
    use crate::store::ProgressState;

    #[test]
    fn test_unlocks_every_threshold_reached() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let landmarks = LandmarkCounts::default();
        let mut state = ProgressState::default();
        state.total_distance_km = 50.9; // totals already include this walk

        let result = DistanceEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        // Catalog declaration order, not numeric order.
        assert_eq!(result.unlocked, ["distance_1", "distance_10", "distance_50", "distance_42"]);
    }

    #[test]
    fn test_already_unlocked_ids_are_skipped() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let landmarks = LandmarkCounts::default();
        let mut state = ProgressState::default();
        state.total_distance_km = 12.0;
        state.mark_unlocked("distance_1");

        let result = DistanceEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        assert_eq!(result.unlocked, ["distance_10"]);
    }
}
