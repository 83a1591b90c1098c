//! Randomized greedy construction.
//!
//! Builds one complete candidate loadout:
//!
//! 1. Rank modules by their priority weight and keep the best
//!    `working_pool_size` as the working pool.
//! 2. Seed the loadout with a uniformly random working-pool module.
//! 3. Repeatedly add the module whose addition gives the highest tiered
//!    score, until the loadout is full.
//!
//! The random seed module is what lets repeated constructions reach
//! different near-optimal loadouts instead of reconverging on one.

mod config;
mod constructor;

pub use config::GreedyConfig;
pub use constructor::GreedyConstructor;
