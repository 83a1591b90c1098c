//! Multi-start loadout optimizer.
//!
//! Drives repeated greedy-construct + local-search attempts under a fixed
//! budget, keeps every distinct loadout found in a [`SolutionPool`], and
//! returns the best one.
//!
//! # Pipeline
//!
//! ```text
//! modules -> valid_modules -> (prefilter) -> { construct -> refine -> pool } x N -> best
//! ```
//!
//! The loop hands control to a [`YieldHook`] every `yield_interval`
//! attempts. That hook is the only suspension and cancellation point of a
//! run; nothing else in the search blocks or waits.

mod config;
mod pool;
mod runner;
mod types;

pub use config::{OptimizerConfig, TieBreaker};
pub use pool::{Solution, SolutionPool};
pub use runner::OptimizerRunner;
pub use types::{NoYield, OptimizationResult, SearchProgress, SearchStats, YieldHook};
