//! Currency and loot-trial math — the distance side of the reward economy.
//!
//! Bones are the in-app currency: one walked kilometre is worth ten bones,
//! with a one-bone floor for any walk long enough to count at all. Loot
//! trials are the number of drop opportunities a walk earns; the random
//! rolls themselves live in the engine crate where an RNG is injected.

/// Walks shorter than this earn nothing at all.
pub const MIN_REWARDED_DISTANCE_KM: f64 = 0.05;

/// Bones granted per walked kilometre.
pub const BONES_PER_KM: f64 = 10.0;

/// Minimum distance before any loot trial is attempted.
pub const LOOT_MIN_DISTANCE_KM: f64 = 0.5;

/// Each full step of this length beyond the baseline earns one extra trial.
pub const LOOT_BONUS_STEP_KM: f64 = 2.0;

/// Convert a walk distance into a bones reward.
///
/// Below [`MIN_REWARDED_DISTANCE_KM`] the walk earns nothing; otherwise the
/// reward is `floor(km * 10)` with a floor of one bone.
pub fn bones_for_distance(distance_km: f64) -> u32 {
    if distance_km < MIN_REWARDED_DISTANCE_KM {
        return 0;
    }
    // Nudge before truncating so that e.g. 2.3 km yields 23 bones even when
    // the product lands a hair under the integer.
    let bones = (distance_km * BONES_PER_KM + 1e-9).floor() as u32;
    bones.max(1)
}

/// Number of loot-drop opportunities a walk of this length earns.
///
/// No trial unless the walk exceeds the baseline distance. One trial is
/// then always attempted, plus one more for every full bonus step walked
/// beyond the baseline.
pub fn loot_trials(distance_km: f64) -> u32 {
    if distance_km <= LOOT_MIN_DISTANCE_KM {
        return 0;
    }
    let mut trials = 1;
    let mut extra = distance_km - LOOT_MIN_DISTANCE_KM;
    while extra > LOOT_BONUS_STEP_KM {
        trials += 1;
        extra -= LOOT_BONUS_STEP_KM;
    }
    trials
}

/// Completion fraction toward a target, clamped to `0.0..=1.0`.
///
/// A zero target reads as no progress rather than a division fault.
pub fn progress_fraction(current: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(current) / f64::from(target)).min(1.0)
}
