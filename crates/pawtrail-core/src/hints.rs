//! Paid hint draws for secret achievements.
//!
//! A hint reveals a secret achievement's name and condition without
//! unlocking it; the condition still has to be met for the reward. Draws
//! pick uniformly from the secret achievements that are neither unlocked
//! nor already revealed, and debit the bones balance. The state is
//! untouched when a draw fails.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::catalog::{AchievementCatalog, AchievementDefinition, Category};
use crate::store::ProgressState;

/// Price of a draw across all categories.
pub const RANDOM_HINT_COST: u32 = 30;

/// Price of a draw restricted to one category.
pub const CATEGORY_HINT_COST: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HintError {
    #[error("no secret achievements left to reveal")]
    NothingToReveal,
    #[error("not enough bones: need {needed}, have {have}")]
    InsufficientBones { needed: u32, have: u32 },
}

/// Reveal one random secret achievement for [`RANDOM_HINT_COST`] bones.
pub fn draw_random_hint<R: Rng + ?Sized>(
    catalog: &AchievementCatalog,
    state: &mut ProgressState,
    rng: &mut R,
) -> Result<AchievementDefinition, HintError> {
    draw(catalog, state, None, RANDOM_HINT_COST, rng)
}

/// Reveal one random secret achievement in `category` for
/// [`CATEGORY_HINT_COST`] bones.
pub fn draw_category_hint<R: Rng + ?Sized>(
    catalog: &AchievementCatalog,
    category: Category,
    state: &mut ProgressState,
    rng: &mut R,
) -> Result<AchievementDefinition, HintError> {
    draw(catalog, state, Some(category), CATEGORY_HINT_COST, rng)
}

fn draw<R: Rng + ?Sized>(
    catalog: &AchievementCatalog,
    state: &mut ProgressState,
    category: Option<Category>,
    cost: u32,
    rng: &mut R,
) -> Result<AchievementDefinition, HintError> {
    let pool: Vec<&AchievementDefinition> = catalog
        .iter()
        .filter(|def| {
            def.secret
                && category.map_or(true, |c| def.category == c)
                && !state.is_unlocked(def.id)
                && !state.is_hint_revealed(def.id)
        })
        .collect();

    let picked = **pool.choose(rng).ok_or(HintError::NothingToReveal)?;
    if !state.try_spend_bones(cost) {
        return Err(HintError::InsufficientBones {
            needed: cost,
            have: state.bones,
        });
    }
    state.reveal_hint(picked.id);
    Ok(picked)
}
