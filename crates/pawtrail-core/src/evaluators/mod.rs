//! Rule evaluators — one per achievement category.
//!
//! Each evaluator is a pure function of the walk's facts, a pre-walk-update
//! snapshot of the progress state, the landmark counters, and the catalog.
//! It reports which achievements newly qualify and which auxiliary counters
//! should change; the orchestrator applies both. Evaluators never mutate
//! anything themselves, which keeps them trivially testable.
//!
//! The registry holds one evaluator per [`Category`] and is looked up by
//! category tag, so adding a category means adding an evaluator, not
//! another branch in the orchestrator.

mod context;
mod distance;
mod environment;
mod frequency;
mod landmark;
mod performance;
mod streak;

pub use context::ContextEvaluator;
pub use distance::DistanceEvaluator;
pub use environment::EnvironmentEvaluator;
pub use frequency::FrequencyEvaluator;
pub use landmark::LandmarkEvaluator;
pub use performance::PerformanceEvaluator;
pub use streak::StreakEvaluator;

use pawtrail_logic::weekend::WeekendStreak;

use crate::catalog::{AchievementCatalog, AchievementDefinition, Category};
use crate::session::{LandmarkCounts, SessionFact};
use crate::store::ProgressState;

/// Read-only inputs to one evaluator run.
///
/// `state` is a snapshot taken after the walk's totals and daily streak
/// were folded in, but before any achievement from this walk unlocked.
pub struct EvalContext<'a> {
    pub fact: &'a SessionFact,
    pub state: &'a ProgressState,
    pub landmarks: &'a LandmarkCounts,
    pub catalog: &'a AchievementCatalog,
}

/// A store change an evaluator wants applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StateMutation {
    /// New steady-pace run length after this walk.
    SetSteadyPaceRun(u32),
    /// New weekend-streak state after this walk.
    SetWeekendStreak(WeekendStreak),
    /// Add this walk's duration to the cumulative total, seconds.
    AddWalkDuration(f64),
}

impl StateMutation {
    /// Apply the mutation to a progress state.
    pub fn apply(self, state: &mut ProgressState) {
        match self {
            StateMutation::SetSteadyPaceRun(run) => state.steady_pace_run = run,
            StateMutation::SetWeekendStreak(weekend) => state.weekend = weekend,
            StateMutation::AddWalkDuration(secs) => state.add_walk_duration(secs),
        }
    }
}

/// What one evaluator concluded for one walk.
#[derive(Debug, Default)]
pub struct Evaluation {
    /// Ids that newly qualify (not yet unlocked in the snapshot, condition
    /// held). Catalog declaration order.
    pub unlocked: Vec<&'static str>,
    /// Counter changes to apply regardless of unlocks.
    pub mutations: Vec<StateMutation>,
}

/// One achievement category's unlock rules.
pub trait RuleEvaluator {
    /// The category this evaluator owns.
    fn category(&self) -> Category;

    /// Check this walk against the category's achievements.
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Evaluation;
}

/// Collect the ids in `category` that are not yet unlocked and whose
/// trigger condition holds.
fn unlock_where<F>(ctx: &EvalContext<'_>, category: Category, condition: F) -> Vec<&'static str>
where
    F: Fn(&AchievementDefinition) -> bool,
{
    ctx.catalog
        .by_category(category)
        .filter(|def| !ctx.state.is_unlocked(def.id) && condition(def))
        .map(|def| def.id)
        .collect()
}

/// The standard set: one evaluator per category, in evaluation order.
pub struct EvaluatorRegistry {
    evaluators: Vec<Box<dyn RuleEvaluator>>,
}

impl EvaluatorRegistry {
    /// Registry with the seven standard evaluators.
    pub fn standard() -> Self {
        Self::from_evaluators(vec![
            Box::new(DistanceEvaluator),
            Box::new(FrequencyEvaluator),
            Box::new(StreakEvaluator),
            Box::new(LandmarkEvaluator),
            Box::new(PerformanceEvaluator),
            Box::new(EnvironmentEvaluator),
            Box::new(ContextEvaluator),
        ])
    }

    /// Build a registry from explicit evaluators. At most one per category.
    pub fn from_evaluators(evaluators: Vec<Box<dyn RuleEvaluator>>) -> Self {
        for (i, ev) in evaluators.iter().enumerate() {
            let clash = evaluators[..i].iter().any(|e| e.category() == ev.category());
            assert!(!clash, "two evaluators registered for {:?}", ev.category());
        }
        Self { evaluators }
    }

    /// Evaluator for a category, if one is registered.
    pub fn get(&self, category: Category) -> Option<&dyn RuleEvaluator> {
        self.evaluators
            .iter()
            .find(|ev| ev.category() == category)
            .map(Box::as_ref)
    }
}
