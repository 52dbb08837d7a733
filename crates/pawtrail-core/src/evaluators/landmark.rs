//! Landmark-visit achievements.
//!
//! Driven entirely by the landmark/POI collaborator's counters, not by the
//! session fact: the collaborator decides what counts as a visit, the
//! engine only compares its totals to the thresholds.

use super::{unlock_where, EvalContext, Evaluation, RuleEvaluator};
use crate::catalog::{Category, LandmarkScope};

/// Unlocks when the collaborator counter selected by a definition's
/// `landmark_scope` reaches its requirement.
pub struct LandmarkEvaluator;

impl RuleEvaluator for LandmarkEvaluator {
    fn category(&self) -> Category {
        Category::Landmark
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation {
        let counts = ctx.landmarks;
        Evaluation {
            unlocked: unlock_where(ctx, Category::Landmark, |def| {
                let count = match def.landmark_scope {
                    Some(LandmarkScope::Parks) => counts.parks_visited,
                    Some(LandmarkScope::SameSpot) => counts.max_same_spot_visits,
                    Some(LandmarkScope::AllDistinct) | None => counts.distinct_landmarks,
                };
                count >= def.requirement
            }),
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
    fn test_scopes_read_their_own_counter() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let state = ProgressState::default();
        let landmarks = LandmarkCounts {
            parks_visited: 5,
            distinct_landmarks: 9,
            max_same_spot_visits: 30,
        };

        let result = LandmarkEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        // Parks at 5 covers both park tiers; 9 distinct misses the 10
        // threshold; 30 same-spot visits hits the guardian.
        assert_eq!(
            result.unlocked,
            ["landmark_park_1", "landmark_park_5", "landmark_home_30"]
        );
    }

    #[test]
    fn test_no_visits_no_unlocks() {
        let catalog = AchievementCatalog::builtin();
        let fact = plain_fact();
        let state = ProgressState::default();
        let landmarks = LandmarkCounts::default();

        let result = LandmarkEvaluator.evaluate(&EvalContext {
            fact: &fact,
            state: &state,
            landmarks: &landmarks,
            catalog: &catalog,
        });
        assert!(result.unlocked.is_empty());
    }
}
