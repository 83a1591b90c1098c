//! Optimizer configuration.
//!
//! [`OptimizerConfig`] holds every budget and threshold of a run. The
//! defaults are the production values.

use crate::greedy::GreedyConfig;
use crate::local::LocalSearchConfig;

/// Rule for choosing among equal-scoring loadouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreaker {
    /// The loadout discovered first wins.
    #[default]
    DiscoveryOrder,

    /// The loadout with the lexicographically smallest sorted id list wins.
    ///
    /// Independent of the random attempt sequence, so two runs that find
    /// the same set of best loadouts always agree.
    LowestKey,
}

/// Configuration for [`OptimizerRunner`](super::OptimizerRunner).
///
/// # Defaults
///
/// ```
/// use u_loadout::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default();
/// assert_eq!(config.max_attempts, 600);
/// assert_eq!(config.target_solutions, 40);
/// assert_eq!(config.yield_interval, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_loadout::optimizer::{OptimizerConfig, TieBreaker};
///
/// let config = OptimizerConfig::default()
///     .with_max_attempts(120)
///     .with_tie_breaker(TieBreaker::LowestKey)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Upper bound on construct + refine attempts.
    pub max_attempts: usize,

    /// Stop once this many distinct loadouts are pooled.
    pub target_solutions: usize,

    /// Attempts between calls to the yield hook.
    pub yield_interval: usize,

    /// Valid-module count above which the attribute prefilter runs.
    pub full_search_ceiling: usize,

    /// Modules kept per effect by the prefilter.
    pub prefilter_top_k: usize,

    /// Greedy construction settings.
    pub greedy: GreedyConfig,

    /// Local search settings.
    pub local_search: LocalSearchConfig,

    /// Rule for equal-scoring loadouts.
    pub tie_breaker: TieBreaker,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 40 * 15,
            target_solutions: 40,
            yield_interval: 10,
            full_search_ceiling: 100,
            prefilter_top_k: 30,
            greedy: GreedyConfig::default(),
            local_search: LocalSearchConfig::default(),
            tie_breaker: TieBreaker::default(),
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Sets the number of distinct loadouts that ends the search.
    pub fn with_target_solutions(mut self, n: usize) -> Self {
        self.target_solutions = n;
        self
    }

    /// Sets the yield cadence.
    pub fn with_yield_interval(mut self, n: usize) -> Self {
        self.yield_interval = n;
        self
    }

    /// Sets the prefilter activation threshold.
    pub fn with_full_search_ceiling(mut self, n: usize) -> Self {
        self.full_search_ceiling = n;
        self
    }

    /// Sets how many modules the prefilter keeps per effect.
    pub fn with_prefilter_top_k(mut self, k: usize) -> Self {
        self.prefilter_top_k = k;
        self
    }

    /// Sets the greedy construction settings.
    pub fn with_greedy(mut self, greedy: GreedyConfig) -> Self {
        self.greedy = greedy;
        self
    }

    /// Sets the local search settings.
    pub fn with_local_search(mut self, local_search: LocalSearchConfig) -> Self {
        self.local_search = local_search;
        self
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".into());
        }
        if self.target_solutions == 0 {
            return Err("target_solutions must be at least 1".into());
        }
        if self.yield_interval == 0 {
            return Err("yield_interval must be at least 1".into());
        }
        if self.prefilter_top_k == 0 {
            return Err("prefilter_top_k must be at least 1".into());
        }
        self.greedy.validate()?;
        self.local_search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.max_attempts, 600);
        assert_eq!(config.target_solutions, 40);
        assert_eq!(config.yield_interval, 10);
        assert_eq!(config.full_search_ceiling, 100);
        assert_eq!(config.prefilter_top_k, 30);
        assert_eq!(config.greedy.working_pool_size, 50);
        assert_eq!(config.local_search.max_iterations, 20);
        assert_eq!(config.tie_breaker, TieBreaker::DiscoveryOrder);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = OptimizerConfig::default()
            .with_max_attempts(10)
            .with_target_solutions(3)
            .with_yield_interval(2)
            .with_full_search_ceiling(5)
            .with_prefilter_top_k(4)
            .with_seed(99);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.target_solutions, 3);
        assert_eq!(config.yield_interval, 2);
        assert_eq!(config.full_search_ceiling, 5);
        assert_eq!(config.prefilter_top_k, 4);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let base = OptimizerConfig::default();
        assert!(base.clone().with_max_attempts(0).validate().is_err());
        assert!(base.clone().with_target_solutions(0).validate().is_err());
        assert!(base.clone().with_yield_interval(0).validate().is_err());
        assert!(base.clone().with_prefilter_top_k(0).validate().is_err());
        assert!(base
            .with_greedy(GreedyConfig::default().with_working_pool_size(0))
            .validate()
            .is_err());
    }
}
