//! Local search execution.
//!
//! # Algorithm
//!
//! 1. Build the relevant set R: modules outside the loadout with an
//!    active prioritized effect. If `|R| < min_relevant`, R = all modules.
//! 2. For each iteration:
//!    a. Scan slots in order. For each slot, sample up to
//!    `samples_per_slot` modules of R not currently in the loadout.
//!    b. Accept the first sample whose substitution strictly improves the
//!    score and end the scan; the next iteration rescans from slot 0.
//!    c. If the scan found nothing and at least half the budget is spent,
//!    stop.
//! 3. Return the final loadout. Its score never drops below the input's.

use super::config::LocalSearchConfig;
use crate::model::Module;
use crate::random::sample_indices;
use crate::scoring::PriorityWeights;
use rand::Rng;
use tracing::trace;

/// Result of one refinement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineResult {
    /// Refined loadout as positions into the candidate slice.
    pub members: Vec<usize>,
    /// Score of the refined loadout.
    pub score: u64,
    /// Iterations executed.
    pub iterations: usize,
    /// Improving substitutions accepted.
    pub improvements: usize,
}

/// First-improvement hill climber over single-slot substitutions.
pub struct LocalSearch<'a> {
    modules: &'a [Module],
    weights: &'a PriorityWeights,
    config: &'a LocalSearchConfig,
}

impl<'a> LocalSearch<'a> {
    /// Creates a refiner over `modules`, the full post-filter candidate set.
    pub fn new(
        modules: &'a [Module],
        weights: &'a PriorityWeights,
        config: &'a LocalSearchConfig,
    ) -> Self {
        Self {
            modules,
            weights,
            config,
        }
    }

    fn score_of(&self, members: &[usize]) -> u64 {
        self.weights.score(members.iter().map(|&i| &self.modules[i]))
    }

    fn relevant_set(&self, members: &[usize]) -> Vec<usize> {
        let relevant: Vec<usize> = (0..self.modules.len())
            .filter(|i| !members.contains(i) && self.weights.touches(&self.modules[*i]))
            .collect();
        if relevant.len() < self.config.min_relevant {
            (0..self.modules.len()).collect()
        } else {
            relevant
        }
    }

    /// Refines `initial`, a loadout given as positions into the candidate slice.
    pub fn refine<R: Rng>(&self, initial: Vec<usize>, rng: &mut R) -> RefineResult {
        let mut current = initial;
        let mut current_score = self.score_of(&current);
        let relevant = self.relevant_set(&current);

        let mut iterations = 0;
        let mut improvements = 0;

        for iteration in 0..self.config.max_iterations {
            iterations += 1;
            let mut improved = false;

            'scan: for slot in 0..current.len() {
                let unused: Vec<usize> = relevant
                    .iter()
                    .copied()
                    .filter(|i| !current.contains(i))
                    .collect();

                for candidate in sample_indices(&unused, self.config.samples_per_slot, rng) {
                    let mut trial = current.clone();
                    trial[slot] = candidate;
                    let score = self.score_of(&trial);
                    if score > current_score {
                        trace!(
                            iteration,
                            slot,
                            from = current_score,
                            to = score,
                            "local search move accepted"
                        );
                        current = trial;
                        current_score = score;
                        improvements += 1;
                        improved = true;
                        break 'scan;
                    }
                }
            }

            if !improved && iteration + 1 >= self.config.max_iterations / 2 {
                break;
            }
        }

        RefineResult {
            members: current,
            score: current_score,
            iterations,
            improvements,
        }
    }
}
