//! Pawtrail progression engine.
//!
//! Given the facts of one completed walk, the engine deterministically and
//! idempotently updates a user's long-lived progression state (totals,
//! streaks, unlocked achievements, counters) and emits a currency/loot
//! reward. The engine is synchronous, does no I/O of its own, and every
//! random draw goes through an injected RNG so outcomes are replayable.
//!
//! Walk tracking, weather lookup, landmark counting, persistence of the
//! snapshot, and all rendering live outside this crate; they meet the
//! engine through [`session::SessionFact`], [`session::LandmarkCounts`],
//! and [`orchestrator::WalkOutcome`].
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Immutable achievement definitions and the built-in table |
//! | [`economy`] | Loot rolls driven by walk distance and an injected RNG |
//! | [`evaluators`] | One rule evaluator per achievement category |
//! | [`hints`] | Paid hint draws revealing secret achievements |
//! | [`loot`] | Treasure items and their rarity pools |
//! | [`orchestrator`] | Per-walk evaluation sequencing and reward crediting |
//! | [`persistence`] | Versioned snapshot of the progress state |
//! | [`progress`] | Per-achievement progress for display |
//! | [`session`] | Immutable facts of one completed walk |
//! | [`store`] | The durable per-user progression state |

pub mod catalog;
pub mod economy;
pub mod evaluators;
pub mod hints;
pub mod loot;
pub mod orchestrator;
pub mod persistence;
pub mod progress;
pub mod session;
pub mod store;
