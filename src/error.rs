//! Error type shared by the search entry points.

use thiserror::Error;

/// Terminal failures of an optimization call.
///
/// Per-attempt failures inside the search loop (an infeasible greedy
/// construction, a duplicate loadout) are absorbed and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// Fewer valid modules than slots, before any filtering.
    #[error("you need at least {required} modules with effects to calculate (found {available})")]
    InsufficientModules { required: usize, available: usize },

    /// Fewer candidates than slots after the attribute prefilter.
    #[error("only {available} modules remain after attribute filtering, {required} required")]
    InsufficientModulesAfterFilter { required: usize, available: usize },

    /// Every attempt within the budget failed to produce a loadout.
    #[error("no feasible loadout found after {attempts} attempts")]
    NoFeasibleSolution { attempts: usize },

    /// Slot count outside the supported range.
    #[error("slot count must be between 2 and 4, got {0}")]
    InvalidSlotCount(usize),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller cancelled the search at a yield point.
    #[error("optimization cancelled after {attempts} attempts")]
    Cancelled { attempts: usize },

    /// Exhaustive search refused an input with too many combinations.
    #[error("{combinations} combinations exceed the exhaustive search limit of {limit}")]
    SearchSpaceTooLarge { combinations: u128, limit: u128 },
}
