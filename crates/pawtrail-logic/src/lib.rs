//! Pure progression logic for Pawtrail.
//!
//! This crate contains the walk-progression rules that are independent of
//! any storage, randomness source, or runtime. Functions take plain data
//! and return results, making them unit-testable and portable between the
//! engine crate, headless harnesses, and any future frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`currency`] | Distance→bones conversion, loot trial counts, progress fractions |
//! | [`pace`] | Steady-pace band and run-length tracking |
//! | [`streak`] | Daily check-in streak state machine |
//! | [`weekend`] | Consecutive-weekend streak state machine |
//! | [`window`] | Hour-of-day windows with midnight wrap |

pub mod currency;
pub mod pace;
pub mod streak;
pub mod weekend;
pub mod window;
