//! Cumulative walk-count achievements.

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator};
use crate::catalog::Category;

/// Unlocks when the all-time walk count (this walk included) reaches a
/// definition's requirement.
pub struct FrequencyEvaluator;

impl RuleEvaluator for FrequencyEvaluator {
    fn category(&self) -> Category {
        Category::Frequency
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let walks = ctx.state.total_walks;
        Evaluation {
            unlocked: unlock_where(ctx, Category::Frequency, |def| walks >= def.requirement),
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
    fn test_first_walk_unlocks_first_outing() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let landmarks = LandmarkCounts::default();
        let mut state = ProgressState::default();
        state.total_walks = 1;

        let result = FrequencyEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        assert_eq!(result.unlocked, ["frequency_1"]);
    }

    #[test]
    fn test_below_threshold_unlocks_nothing_new() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let landmarks = LandmarkCounts::default();
        let mut state = ProgressState::default();
        state.total_walks = 9;
        state.mark_unlocked("frequency_1");

        let result = FrequencyEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        assert!(result.unlocked.is_empty());
    }
}
