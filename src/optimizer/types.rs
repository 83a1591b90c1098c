//! Result, progress and yield-hook types.

use crate::model::Module;
use crate::scoring::CombinedEffects;
use std::ops::ControlFlow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a successful optimization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationResult {
    /// Tiered, priority-weighted score of the chosen loadout.
    pub total_score: u64,
    /// The chosen modules, exactly `num_slots` of them.
    pub optimal_modules: Vec<Module>,
    /// Summed level of every effect across the chosen modules.
    pub combined_effects: CombinedEffects,
    /// `combined_effects` restricted to prioritized effects.
    pub prioritized_effects: CombinedEffects,
    /// How the search budget was spent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: SearchStats,
}

/// Search statistics attached to a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchStats {
    /// Attempts executed.
    pub attempts: usize,
    /// Distinct loadouts found.
    pub unique_solutions: usize,
    /// Candidates the search ran over (after prefiltering).
    pub candidate_count: usize,
    /// Whether the attribute prefilter reduced the pool.
    pub prefiltered: bool,
}

/// Snapshot handed to a [`YieldHook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// Attempts executed so far.
    pub attempts: usize,
    /// Attempt budget.
    pub max_attempts: usize,
    /// Distinct loadouts pooled so far.
    pub unique_solutions: usize,
    /// Best score pooled so far, if any.
    pub best_score: Option<u64>,
}

/// Cooperative yield point of the attempt loop.
///
/// Called every `yield_interval` attempts. A host with an event loop can
/// pump it here; returning [`ControlFlow::Break`] cancels the run.
///
/// Any `FnMut(&SearchProgress) -> ControlFlow<()>` closure is a hook.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use u_loadout::optimizer::{SearchProgress, YieldHook};
///
/// let mut calls = 0;
/// let mut hook = |_: &SearchProgress| {
///     calls += 1;
///     ControlFlow::Continue(())
/// };
/// let progress = SearchProgress { attempts: 10, max_attempts: 600, unique_solutions: 3, best_score: Some(40) };
/// assert!(hook.on_yield(&progress).is_continue());
/// ```
pub trait YieldHook {
    /// Receives control from the search.
    fn on_yield(&mut self, progress: &SearchProgress) -> ControlFlow<()>;
}

impl<F> YieldHook for F
where
    F: FnMut(&SearchProgress) -> ControlFlow<()>,
{
    fn on_yield(&mut self, progress: &SearchProgress) -> ControlFlow<()> {
        self(progress)
    }
}

/// Hook that never suspends and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoYield;

impl YieldHook for NoYield {
    fn on_yield(&mut self, _progress: &SearchProgress) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
