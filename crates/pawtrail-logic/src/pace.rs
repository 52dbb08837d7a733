//! Steady-pace band tracking.
//!
//! The "steady output" achievement wants a run of consecutive walks whose
//! average pace stays inside a comfortable band. The run length survives
//! between walks, so the transition function here is pure and the engine
//! persists the counter.

/// Lower bound of the steady band, inclusive.
pub const STEADY_PACE_MIN_KMH: f64 = 4.0;

/// Upper bound of the steady band, inclusive.
pub const STEADY_PACE_MAX_KMH: f64 = 6.0;

/// Whether an average speed counts as a steady-paced walk.
pub fn is_steady_pace(speed_kmh: f64) -> bool {
    (STEADY_PACE_MIN_KMH..=STEADY_PACE_MAX_KMH).contains(&speed_kmh)
}

/// Next run length after a walk at the given average speed.
///
/// A walk inside the band extends the run; anything else resets it to zero.
pub fn next_steady_run(run: u32, speed_kmh: f64) -> u32 {
    if is_steady_pace(speed_kmh) {
        run + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_is_inclusive() {
        assert!(is_steady_pace(4.0));
        assert!(is_steady_pace(5.0));
        assert!(is_steady_pace(6.0));
        assert!(!is_steady_pace(3.99));
        assert!(!is_steady_pace(6.01));
    }

    #[test]
    fn test_run_extends_inside_band() {
        assert_eq!(next_steady_run(0, 5.0), 1);
        assert_eq!(next_steady_run(4, 4.0), 5);
    }

    #[test]
    fn test_run_resets_outside_band() {
        assert_eq!(next_steady_run(4, 8.0), 0);
        assert_eq!(next_steady_run(1, 0.0), 0);
    }
}
