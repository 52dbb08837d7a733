//! Daily check-in streak state machine.
//!
//! A streak counts consecutive calendar days with at least one completed
//! walk. Multiple walks on the same day are a single check-in; a missed day
//! breaks the run. The best run ever observed is kept alongside the current
//! one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day walk streak.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStreak {
    /// Current run of consecutive check-in days.
    pub current: u32,
    /// Longest run ever observed.
    pub best: u32,
    /// Calendar day of the most recent check-in.
    pub last_day: Option<NaiveDate>,
}

impl DailyStreak {
    /// Fold one walk on `day` into the streak.
    ///
    /// The same day as the last check-in is a no-op; the day directly after
    /// it extends the run; any other gap (or a first-ever walk) restarts the
    /// run at one.
    pub fn check_in(&mut self, day: NaiveDate) {
        match self.last_day {
            Some(last) if day == last => return,
            Some(last) if (day - last).num_days() == 1 => self.current += 1,
            _ => self.current = 1,
        }
        self.best = self.best.max(self.current);
        self.last_day = Some(day);
    }
}
