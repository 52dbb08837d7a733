//! Loot rolls — the probabilistic half of the reward economy.
//!
//! The deterministic half (bones per kilometre, trial counts) lives in
//! [`pawtrail_logic::currency`]. This module performs the actual drop
//! rolls, and takes the RNG as a parameter so callers can replay or pin
//! outcomes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::loot::{LootCatalog, LootItem, LootRarity};
use pawtrail_logic::currency::loot_trials;

/// Probability that a single trial drops anything at all.
pub const DROP_CHANCE: f64 = 0.6;

// Cumulative tier boundaries for a single uniform roll in [0, 1).
const COMMON_BELOW: f64 = 0.50;
const UNCOMMON_BELOW: f64 = 0.85;
const RARE_BELOW: f64 = 0.99;

/// Map one uniform roll in `[0, 1)` to a rarity tier.
///
/// Common 50%, uncommon 35%, rare 14%, legendary 1%.
pub fn tier_for_roll(roll: f64) -> LootRarity {
    if roll < COMMON_BELOW {
        LootRarity::Common
    } else if roll < UNCOMMON_BELOW {
        LootRarity::Uncommon
    } else if roll < RARE_BELOW {
        LootRarity::Rare
    } else {
        LootRarity::Legendary
    }
}

/// Roll the loot drops for a walk of the given distance.
///
/// Each trial succeeds with [`DROP_CHANCE`]; a successful trial picks a
/// tier from one uniform roll, then an item uniformly from that tier's
/// pool. An empty pool yields nothing even when the trial succeeded.
pub fn roll_loot<R: Rng + ?Sized>(
    distance_km: f64,
    catalog: &LootCatalog,
    rng: &mut R,
) -> Vec<LootItem> {
    let mut found = Vec::new();
    for _ in 0..loot_trials(distance_km) {
        if rng.gen::<f64>() >= DROP_CHANCE {
            continue;
        }
        let tier = tier_for_roll(rng.gen::<f64>());
        if let Some(item) = catalog.pool(tier).choose(rng) {
            found.push(**item);
        }
    }
    found
}
