//! Candidate pool reduction.
//!
//! - [`valid_modules`] drops modules that carry no active effect.
//! - [`prefilter`] bounds the pool of a large inventory to the union of
//!   each effect's top-K modules. A module can only contribute through its
//!   own effects, so one that is never among the top K for any of them is
//!   dominated for every effect it has.

mod prefilter;
mod validate;

pub use prefilter::{prefilter, PrefilterOutcome};
pub use validate::valid_modules;
