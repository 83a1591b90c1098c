//! Exact search by full enumeration.
//!
//! Scores every `k`-combination of the valid modules and keeps the best.
//! Exponential in `k` and only practical for small inventories; the
//! heuristic [`optimizer`](crate::optimizer) is the general entry point.
//! Useful as a reference to check heuristic results against.

mod search;

pub use search::{combination_count, combinations, ExhaustiveSearch};
