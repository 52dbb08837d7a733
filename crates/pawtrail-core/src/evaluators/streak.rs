//! Consecutive-day streak achievements.
//!
//! The daily streak itself advances in the orchestrator, once per walk and
//! before any evaluator runs; this evaluator only reads the result.

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator};
use crate::catalog::Category;

/// Unlocks when the current daily streak reaches a definition's
/// requirement.
pub struct StreakEvaluator;

impl RuleEvaluator for StreakEvaluator {
    fn category(&self) -> Category {
        Category::Streak
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let current = ctx.state.streak.current;
        Evaluation {
            unlocked: unlock_where(ctx, Category::Streak, |def| current >= def.requirement),
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
    fn test_week_long_streak() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let landmarks = LandmarkCounts::default();
        let mut state = ProgressState::default();
        state.streak.current = 7;
        state.mark_unlocked("streak_3");

        let result = StreakEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        assert_eq!(result.unlocked, ["streak_7"]);
    }
}
