//! Optimizer execution loop.
//!
//! # Algorithm
//!
//! 1. Keep valid modules; fail if fewer than `num_slots`.
//! 2. Above `full_search_ceiling` valid modules, reduce the pool with the
//!    per-effect top-K prefilter; fail if fewer than `num_slots` remain.
//! 3. Until `max_attempts` attempts are spent or the pool holds
//!    `target_solutions` distinct loadouts (or every combination that
//!    exists):
//!    a. Construct a loadout greedily from a random seed module. An
//!    infeasible construction ends the attempt.
//!    b. Refine it with local search.
//!    c. Pool it unless the same set of modules is already pooled.
//!    d. Every `yield_interval` attempts, hand control to the yield hook.
//! 4. Return the best pooled loadout, or fail if the pool is empty.

use super::config::OptimizerConfig;
use super::pool::SolutionPool;
use super::types::{OptimizationResult, SearchProgress, SearchStats, YieldHook};
use crate::error::OptimizeError;
use crate::exhaustive::combination_count;
use crate::filter::{prefilter, valid_modules};
use crate::greedy::GreedyConstructor;
use crate::local::LocalSearch;
use crate::model::Module;
use crate::random::rng_from_seed;
use crate::scoring::{combined_effects, PriorityWeights};
use rand::Rng;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Supported loadout sizes.
const SLOT_RANGE: std::ops::RangeInclusive<usize> = 2..=4;

/// Executes the multi-start loadout search.
///
/// # Usage
///
/// ```
/// use u_loadout::model::Module;
/// use u_loadout::optimizer::{OptimizerConfig, OptimizerRunner};
///
/// let modules = vec![
///     Module::new("A").with_effect(0, "Str", 10),
///     Module::new("B").with_effect(0, "Str", 8).with_effect(1, "Agi", 9),
///     Module::new("C").with_effect(0, "Agi", 10),
/// ];
/// let config = OptimizerConfig::default().with_seed(42);
/// let result = OptimizerRunner::run(&modules, 2, &["Str"], &config).unwrap();
///
/// assert_eq!(result.total_score, 168);
/// assert_eq!(result.prioritized_effects["Str"], 18);
/// ```
pub struct OptimizerRunner;

impl OptimizerRunner {
    /// Runs the search with a generator seeded from `config.seed`.
    pub fn run<S: AsRef<str>>(
        modules: &[Module],
        num_slots: usize,
        priority_effects: &[S],
        config: &OptimizerConfig,
    ) -> Result<OptimizationResult, OptimizeError> {
        Self::run_with_cancel(modules, num_slots, priority_effects, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked at every yield point. A cancelled run fails with
    /// [`OptimizeError::Cancelled`]; it never returns a partial result.
    pub fn run_with_cancel<S: AsRef<str>>(
        modules: &[Module],
        num_slots: usize,
        priority_effects: &[S],
        config: &OptimizerConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<OptimizationResult, OptimizeError> {
        let mut rng = rng_from_seed(config.seed);
        let mut hook = |_: &SearchProgress| match &cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        };
        Self::run_with_rng(
            modules,
            num_slots,
            priority_effects,
            config,
            &mut rng,
            &mut hook,
        )
    }

    /// Runs the search with a caller-supplied generator and yield hook.
    ///
    /// `config.seed` is ignored; all randomness comes from `rng`, so the
    /// same generator state always reproduces the same attempt sequence.
    pub fn run_with_rng<S, R, H>(
        modules: &[Module],
        num_slots: usize,
        priority_effects: &[S],
        config: &OptimizerConfig,
        rng: &mut R,
        hook: &mut H,
    ) -> Result<OptimizationResult, OptimizeError>
    where
        S: AsRef<str>,
        R: Rng,
        H: YieldHook,
    {
        config.validate().map_err(OptimizeError::InvalidConfig)?;
        if !SLOT_RANGE.contains(&num_slots) {
            return Err(OptimizeError::InvalidSlotCount(num_slots));
        }

        let valid = valid_modules(modules);
        if valid.len() < num_slots {
            return Err(OptimizeError::InsufficientModules {
                required: num_slots,
                available: valid.len(),
            });
        }

        let outcome = prefilter(valid, config.full_search_ceiling, config.prefilter_top_k);
        let candidates = outcome.candidates;
        if candidates.len() < num_slots {
            return Err(OptimizeError::InsufficientModulesAfterFilter {
                required: num_slots,
                available: candidates.len(),
            });
        }

        let weights = PriorityWeights::new(priority_effects);
        let constructor = GreedyConstructor::new(&candidates, &weights, &config.greedy);
        let refiner = LocalSearch::new(&candidates, &weights, &config.local_search);

        // No point searching for more distinct loadouts than exist.
        let reachable = combination_count(candidates.len(), num_slots);
        let target = reachable.min(config.target_solutions as u128) as usize;

        debug!(
            candidates = candidates.len(),
            prefiltered = outcome.applied,
            num_slots,
            priorities = weights.names().len(),
            target,
            "loadout search started"
        );

        let mut pool = SolutionPool::new();
        let mut attempts = 0usize;

        while attempts < config.max_attempts && pool.len() < target {
            attempts += 1;

            if let Some(initial) = constructor.construct(num_slots, rng) {
                let refined = refiner.refine(initial, rng);
                let score = refined.score;
                if pool.insert_with(refined.members, &candidates, |_| score) {
                    trace!(attempt = attempts, score, pooled = pool.len(), "loadout pooled");
                }
            }

            if attempts % config.yield_interval == 0 {
                let progress = SearchProgress {
                    attempts,
                    max_attempts: config.max_attempts,
                    unique_solutions: pool.len(),
                    best_score: pool.best_score(),
                };
                if hook.on_yield(&progress).is_break() {
                    debug!(attempts, "loadout search cancelled");
                    return Err(OptimizeError::Cancelled { attempts });
                }
            }
        }

        let best = pool
            .best(config.tie_breaker)
            .ok_or(OptimizeError::NoFeasibleSolution { attempts })?;

        debug!(
            attempts,
            unique_solutions = pool.len(),
            best_score = best.score(),
            "loadout search finished"
        );

        let optimal_modules: Vec<Module> = best
            .members()
            .iter()
            .map(|&i| candidates[i].clone())
            .collect();
        let combined = combined_effects(&optimal_modules);
        let prioritized = weights.prioritized(&combined);

        Ok(OptimizationResult {
            total_score: best.score(),
            optimal_modules,
            combined_effects: combined,
            prioritized_effects: prioritized,
            stats: SearchStats {
                attempts,
                unique_solutions: pool.len(),
                candidate_count: candidates.len(),
                prefiltered: outcome.applied,
            },
        })
    }
}
