//! Consecutive-weekend streak state machine.
//!
//! Tracks Saturday/Sunday walks across week boundaries: walking on both
//! days of one weekend counts twice, and the run survives as long as no
//! whole week goes by without a weekend walk. Weeks are ISO weeks, anchored
//! on Monday, so Saturday→Sunday is a same-week step and Saturday→next
//! Saturday is exactly one week apart.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Whether a day is a Saturday or Sunday.
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday of the ISO week containing `day`.
fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Run of consecutive weekends with at least one walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendStreak {
    /// Weekend walks in the current unbroken run.
    pub count: u32,
    /// Most recent weekend day with a walk.
    pub last_day: Option<NaiveDate>,
}

impl WeekendStreak {
    /// Fold one weekend walk on `day` into the run.
    ///
    /// The same day is a no-op; a walk in the same week (the other weekend
    /// day) or exactly one week later extends the run; a gap of more than
    /// one week restarts it at one. Callers only feed in weekend days.
    pub fn check_in(&mut self, day: NaiveDate) {
        match self.last_day {
            None => self.count = 1,
            Some(last) if day == last => return,
            Some(last) => {
                let weeks = (week_start(day) - week_start(last)).num_days() / 7;
                if (0..=1).contains(&weeks) {
                    self.count += 1;
                } else {
                    self.count = 1;
                }
            }
        }
        self.last_day = Some(day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-03-07 is a Saturday throughout these tests.

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(day(2026, 3, 7))); // Saturday
        assert!(is_weekend(day(2026, 3, 8))); // Sunday
        assert!(!is_weekend(day(2026, 3, 9))); // Monday
    }

    #[test]
    fn test_first_weekend_starts_at_one() {
        let mut streak = WeekendStreak::default();
        streak.check_in(day(2026, 3, 7));
        assert_eq!(streak.count, 1);
    }

    #[test]
    fn test_same_day_is_a_no_op() {
        let mut streak = WeekendStreak::default();
        streak.check_in(day(2026, 3, 7));
        streak.check_in(day(2026, 3, 7));
        assert_eq!(streak.count, 1);
    }

    #[test]
    fn test_saturday_then_sunday_counts_twice() {
        let mut streak = WeekendStreak::default();
        streak.check_in(day(2026, 3, 7));
        streak.check_in(day(2026, 3, 8));
        assert_eq!(streak.count, 2);
    }

    #[test]
    fn test_next_weekend_extends() {
        let mut streak = WeekendStreak::default();
        streak.check_in(day(2026, 3, 7));
        streak.check_in(day(2026, 3, 14));
        assert_eq!(streak.count, 2);
    }

    #[test]
    fn test_sunday_to_next_saturday_extends() {
        let mut streak = WeekendStreak::default();
        streak.check_in(day(2026, 3, 8));
        streak.check_in(day(2026, 3, 14));
        assert_eq!(streak.count, 2);
    }

    #[test]
    fn test_skipped_weekend_resets() {
        let mut streak = WeekendStreak::default();
        streak.check_in(day(2026, 3, 7));
        streak.check_in(day(2026, 3, 21)); // two weeks later
        assert_eq!(streak.count, 1);
    }

    #[test]
    fn test_four_weekend_run() {
        let mut streak = WeekendStreak::default();
        for d in [7, 14, 21, 28] {
            streak.check_in(day(2026, 3, d));
        }
        assert_eq!(streak.count, 4);
    }
}
