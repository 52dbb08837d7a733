//! Per-achievement progress for display.
//!
//! Maps an achievement definition to a `(current, target)` pair read from
//! the progression state and the landmark counters, plus a clamped
//! completion fraction. Single-walk achievements have no meaningful
//! accumulator, so they report 0/1 until unlocked and 1/1 after.

use pawtrail_logic::currency::progress_fraction;

use crate::catalog::{AchievementDefinition, Category, LandmarkScope};
use crate::session::LandmarkCounts;
use crate::store::ProgressState;

/// The `(current, target)` pair behind an achievement's progress bar.
pub fn progress_toward(
    def: &AchievementDefinition,
    state: &ProgressState,
    landmarks: &LandmarkCounts,
) -> (u32, u32) {
    let current = match def.category {
        Category::Distance => state.total_distance_km.max(0.0) as u32,
        Category::Frequency => state.total_walks,
        Category::Streak => state.streak.current,
        Category::Landmark => match def.landmark_scope {
            Some(LandmarkScope::Parks) => landmarks.parks_visited,
            Some(LandmarkScope::AllDistinct) => landmarks.distinct_landmarks,
            Some(LandmarkScope::SameSpot) => landmarks.max_same_spot_visits,
            None => 0,
        },
        Category::Performance if def.id == "performance_steady_5" => state.steady_pace_run,
        Category::Context if def.id == "context_companion_100" => {
            state.walk_duration_hours().max(0.0) as u32
        }
        // Single-walk conditions: done or not done.
        _ => return (u32::from(state.is_unlocked(def.id)), 1),
    };
    (current, def.requirement)
}

/// Completion fraction in `[0.0, 1.0]` for an achievement's progress bar.
pub fn progress_percentage(
    def: &AchievementDefinition,
    state: &ProgressState,
    landmarks: &LandmarkCounts,
) -> f64 {
    if state.is_unlocked(def.id) {
        return 1.0;
    }
    let (current, target) = progress_toward(def, state, landmarks);
    progress_fraction(current, target)
}
