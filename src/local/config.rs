//! Local search configuration.

/// Configuration parameters for [`LocalSearch`](super::LocalSearch).
///
/// # Examples
///
/// ```
/// use u_loadout::local::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(40)
///     .with_samples_per_slot(8);
/// assert_eq!(config.max_iterations, 40);
/// assert_eq!(config.samples_per_slot, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSearchConfig {
    /// Maximum number of improvement iterations.
    pub max_iterations: usize,
    /// Candidates sampled per slot before moving to the next slot.
    pub samples_per_slot: usize,
    /// Minimum size of the priority-relevant candidate set. Below this,
    /// every candidate is considered.
    pub min_relevant: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            samples_per_slot: 15,
            min_relevant: 10,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of candidates sampled per slot.
    pub fn with_samples_per_slot(mut self, n: usize) -> Self {
        self.samples_per_slot = n;
        self
    }

    /// Sets the minimum relevant-set size.
    pub fn with_min_relevant(mut self, n: usize) -> Self {
        self.min_relevant = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.samples_per_slot == 0 {
            return Err("samples_per_slot must be at least 1".into());
        }
        Ok(())
    }
}
