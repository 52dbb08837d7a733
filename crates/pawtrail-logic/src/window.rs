//! Hour-of-day windows, with wrap past midnight.

/// Whether `hour` falls inside the half-open window `[start, end)`.
///
/// When `start > end` the window wraps past midnight, e.g. 23–2 covers
/// hours 23, 0 and 1. A window with `start == end` is empty.
pub fn hour_in_window(hour: u32, start: u32, end: u32) -> bool {
    if start > end {
        hour >= start || hour < end
    } else {
        hour >= start && hour < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_window() {
        assert!(hour_in_window(4, 4, 6));
        assert!(hour_in_window(5, 4, 6));
        assert!(!hour_in_window(6, 4, 6));
        assert!(!hour_in_window(3, 4, 6));
    }

    #[test]
    fn test_midnight_wrap() {
        for hour in [23, 0, 1] {
            assert!(hour_in_window(hour, 23, 2), "hour {hour} should match");
        }
        assert!(!hour_in_window(2, 23, 2));
        assert!(!hour_in_window(3, 23, 2));
        assert!(!hour_in_window(22, 23, 2));
    }

    #[test]
    fn test_late_evening_window() {
        assert!(hour_in_window(22, 22, 24));
        assert!(hour_in_window(23, 22, 24));
        assert!(!hour_in_window(0, 22, 24));
    }

    #[test]
    fn test_empty_window() {
        assert!(!hour_in_window(5, 5, 5));
    }
}
