//! The durable per-user progression state.
//!
//! One [`ProgressState`] exists per user. The orchestrator is its only
//! writer during evaluation; shop flows (hint draws, purchases) use the
//! same total mutators. The caller persists the state after every
//! mutation via [`crate::persistence`].
//!
//! The unlocked-achievement set only ever grows. The auxiliary counters
//! (`steady_pace_run`, `weekend`, `walk_duration_secs`) default to zero on
//! deserialization so a partial snapshot restores instead of failing.

use std::collections::BTreeSet;

use pawtrail_logic::streak::DailyStreak;
use pawtrail_logic::weekend::WeekendStreak;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the engine knows about one user's progression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Bones currency balance.
    pub bones: u32,
    /// Completed walks, all time.
    pub total_walks: u32,
    /// Kilometres walked, all time.
    pub total_distance_km: f64,
    /// Daily check-in streak.
    pub streak: DailyStreak,
    /// Ids of unlocked achievements. Monotonically non-decreasing.
    pub unlocked: BTreeSet<String>,
    /// Ids of secret achievements whose hint has been purchased. Separate
    /// from `unlocked`: a hint can be revealed before the condition is met.
    pub hints_revealed: BTreeSet<String>,
    /// Consecutive steady-paced walks (see [`pawtrail_logic::pace`]).
    #[serde(default)]
    pub steady_pace_run: u32,
    /// Consecutive-weekend streak.
    #[serde(default)]
    pub weekend: WeekendStreak,
    /// Total walk time across all walks, seconds.
    #[serde(default)]
    pub walk_duration_secs: f64,
    /// Idempotency key of the most recently evaluated walk.
    #[serde(default)]
    pub last_session: Option<Uuid>,
}

impl ProgressState {
    /// Add bones to the balance.
    pub fn credit_bones(&mut self, amount: u32) {
        self.bones = self.bones.saturating_add(amount);
    }

    /// Deduct bones if the balance covers it. Returns whether it did; the
    /// balance is untouched on failure.
    pub fn try_spend_bones(&mut self, amount: u32) -> bool {
        match self.bones.checked_sub(amount) {
            Some(rest) => {
                self.bones = rest;
                true
            }
            None => false,
        }
    }

    /// Record an achievement as unlocked. Returns true if it was newly
    /// inserted; re-unlocking is a no-op.
    pub fn mark_unlocked(&mut self, id: &str) -> bool {
        self.unlocked.insert(id.to_owned())
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Record a secret achievement's hint as revealed.
    pub fn reveal_hint(&mut self, id: &str) {
        self.hints_revealed.insert(id.to_owned());
    }

    pub fn is_hint_revealed(&self, id: &str) -> bool {
        self.hints_revealed.contains(id)
    }

    /// Add one walk's duration to the running total.
    pub fn add_walk_duration(&mut self, secs: f64) {
        self.walk_duration_secs += secs;
    }

    /// Total walk time in hours.
    pub fn walk_duration_hours(&self) -> f64 {
        self.walk_duration_secs / 3600.0
    }
}
