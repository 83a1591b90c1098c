//! Enumeration engine.

use crate::error::OptimizeError;
use crate::filter::valid_modules;
use crate::model::Module;
use crate::optimizer::{OptimizationResult, SearchStats};
use crate::scoring::{combined_effects, PriorityWeights};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of `k`-element subsets of an `n`-element set.
///
/// # Examples
///
/// ```
/// use u_loadout::exhaustive::combination_count;
///
/// assert_eq!(combination_count(5, 2), 10);
/// assert_eq!(combination_count(100, 4), 3_921_225);
/// assert_eq!(combination_count(2, 3), 0);
/// ```
pub fn combination_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut count: u128 = 1;
    for i in 0..k {
        // Exact at every step: the running value is C(n, i + 1).
        count = count.saturating_mul((n - i) as u128) / (i + 1) as u128;
    }
    count
}

/// Iterates over all `k`-combinations of `0..n` in lexicographic order.
///
/// # Examples
///
/// ```
/// use u_loadout::exhaustive::combinations;
///
/// let all: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(all, vec![
///     vec![0, 1], vec![0, 2], vec![0, 3],
///     vec![1, 2], vec![1, 3], vec![2, 3],
/// ]);
/// ```
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        indices: (0..k).collect(),
        started: false,
        done: k > n,
    }
}

/// Iterator returned by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Exact optimizer that scores every combination.
///
/// Ties keep the lexicographically first combination of valid-module
/// positions.
///
/// # Examples
///
/// ```
/// use u_loadout::exhaustive::ExhaustiveSearch;
/// use u_loadout::model::Module;
///
/// let modules = vec![
///     Module::new("A").with_effect(0, "Str", 10),
///     Module::new("B").with_effect(0, "Str", 8).with_effect(1, "Agi", 9),
///     Module::new("C").with_effect(0, "Agi", 10),
/// ];
/// let result = ExhaustiveSearch::default().run(&modules, 2, &["Str"]).unwrap();
/// assert_eq!(result.total_score, 168);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveSearch {
    limit: u128,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self { limit: 2_000_000 }
    }
}

impl ExhaustiveSearch {
    /// Sets the largest combination count the search will enumerate.
    pub fn with_limit(mut self, limit: u128) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the combination limit.
    pub fn limit(&self) -> u128 {
        self.limit
    }

    /// Finds the best `num_slots`-combination of the valid modules.
    pub fn run<S: AsRef<str>>(
        &self,
        modules: &[Module],
        num_slots: usize,
        priority_effects: &[S],
    ) -> Result<OptimizationResult, OptimizeError> {
        if num_slots == 0 {
            return Err(OptimizeError::InvalidSlotCount(num_slots));
        }
        let valid = valid_modules(modules);
        if valid.len() < num_slots {
            return Err(OptimizeError::InsufficientModules {
                required: num_slots,
                available: valid.len(),
            });
        }
        let total = combination_count(valid.len(), num_slots);
        if total > self.limit {
            return Err(OptimizeError::SearchSpaceTooLarge {
                combinations: total,
                limit: self.limit,
            });
        }

        let weights = PriorityWeights::new(priority_effects);
        let (best, best_score) = best_combination(&valid, num_slots, &weights)
            .ok_or(OptimizeError::NoFeasibleSolution { attempts: 0 })?;

        debug!(
            candidates = valid.len(),
            combinations = total as u64,
            best_score,
            "exhaustive search finished"
        );

        let optimal_modules: Vec<Module> = best.iter().map(|&i| valid[i].clone()).collect();
        let combined = combined_effects(&optimal_modules);
        let prioritized = weights.prioritized(&combined);
        let evaluated = usize::try_from(total).unwrap_or(usize::MAX);

        Ok(OptimizationResult {
            total_score: best_score,
            optimal_modules,
            combined_effects: combined,
            prioritized_effects: prioritized,
            stats: SearchStats {
                attempts: evaluated,
                unique_solutions: evaluated,
                candidate_count: valid.len(),
                prefiltered: false,
            },
        })
    }
}

fn score_of(modules: &[Module], combo: &[usize], weights: &PriorityWeights) -> u64 {
    weights.score(combo.iter().map(|&i| &modules[i]))
}

#[cfg(not(feature = "parallel"))]
fn best_combination(
    modules: &[Module],
    k: usize,
    weights: &PriorityWeights,
) -> Option<(Vec<usize>, u64)> {
    let mut best: Option<(Vec<usize>, u64)> = None;
    for combo in combinations(modules.len(), k) {
        let score = score_of(modules, &combo, weights);
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((combo, score));
        }
    }
    best
}

#[cfg(feature = "parallel")]
fn best_combination(
    modules: &[Module],
    k: usize,
    weights: &PriorityWeights,
) -> Option<(Vec<usize>, u64)> {
    let combos: Vec<Vec<usize>> = combinations(modules.len(), k).collect();
    let scores: Vec<u64> = combos
        .par_iter()
        .map(|combo| score_of(modules, combo, weights))
        .collect();

    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if best.map_or(true, |b| score > scores[b]) {
            best = Some(i);
        }
    }
    best.map(|i| (combos[i].clone(), scores[i]))
}
