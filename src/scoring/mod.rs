//! Tiered, priority-weighted scoring of module combinations.
//!
//! The score of a set of modules is computed in three steps:
//!
//! 1. **Combine**: sum each effect's level across every module in the set.
//! 2. **Tier**: map each combined level through a descending step table
//!    ([`tier_score`]).
//! 3. **Weight**: multiply each effect's tier score by its priority
//!    multiplier ([`PriorityWeights`]) and sum.
//!
//! Scoring is pure: the same combination and priority list always yield
//! the same score.

mod tier;
mod weights;

pub use tier::{tier_score, TIER_THRESHOLDS};
pub use weights::{
    calculate_score, combined_effects, CombinedEffects, PriorityWeights, PRIORITY_MULTIPLIERS,
};
