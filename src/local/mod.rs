//! Sampled single-slot local search.
//!
//! Hill-climbs a complete loadout by substituting one slot at a time:
//! for each slot, a small random sample of unused candidates is scored
//! and the first strictly improving substitution is taken
//! (first-improvement). The search stops on a plateau once at least half
//! of the iteration budget is spent, or when the budget runs out.
//!
//! Candidates are drawn from modules touching a prioritized effect. When
//! too few such modules exist, the whole candidate set is used instead
//! so refinement is never starved.

mod config;
mod refiner;

pub use config::LocalSearchConfig;
pub use refiner::{LocalSearch, RefineResult};
