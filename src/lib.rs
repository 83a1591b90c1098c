//! Module loadout optimizer.
//!
//! Picks the best `k` modules (`k` in 2..=4) from an inventory of
//! multi-effect game modules, where "best" is a priority-weighted sum of
//! tiered effect scores:
//!
//! - **Scoring** ([`scoring`]): combine effect levels across the loadout,
//!   map each through a step table, weight by priority position.
//! - **Filtering** ([`filter`]): drop empty modules; bound large
//!   inventories to each effect's top-K modules.
//! - **Greedy construction** ([`greedy`]): randomized seed module plus
//!   best-addition completion.
//! - **Local search** ([`local`]): sampled first-improvement slot swaps.
//! - **Optimizer** ([`optimizer`]): multi-start driver with a distinct
//!   solution pool, a cooperative yield hook and cancellation.
//! - **Exhaustive search** ([`exhaustive`]): exact enumeration for small
//!   inventories.
//!
//! The search is a bounded heuristic, not an exact solver. It performs no
//! I/O and keeps no state between calls.
//!
//! # Example
//!
//! ```
//! use u_loadout::model::Module;
//!
//! let inventory = vec![
//!     Module::new("Module 1").with_effect(0, "Strength Boost", 10),
//!     Module::new("Module 2")
//!         .with_effect(0, "Strength Boost", 8)
//!         .with_effect(1, "Agility Boost", 9),
//!     Module::new("Module 3").with_effect(0, "Agility Boost", 10),
//! ];
//!
//! let result = u_loadout::optimize(&inventory, 2, &["Strength Boost"]).unwrap();
//! assert_eq!(result.optimal_modules.len(), 2);
//! assert_eq!(result.prioritized_effects["Strength Boost"], 18);
//! ```

pub mod error;
pub mod exhaustive;
pub mod filter;
pub mod greedy;
pub mod local;
pub mod model;
pub mod optimizer;
pub mod random;
pub mod scoring;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::OptimizeError;
pub use model::{EffectSlot, Module};
pub use optimizer::{OptimizationResult, OptimizerConfig, OptimizerRunner};

/// Finds the best `num_slots` modules with the default configuration.
///
/// Shorthand for [`OptimizerRunner::run`] with [`OptimizerConfig::default`]
/// and a random seed.
pub fn optimize<S: AsRef<str>>(
    modules: &[Module],
    num_slots: usize,
    priority_effects: &[S],
) -> Result<OptimizationResult, OptimizeError> {
    OptimizerRunner::run(modules, num_slots, priority_effects, &OptimizerConfig::default())
}
