//! Greedy construction configuration.

/// Configuration for [`GreedyConstructor`](super::GreedyConstructor).
///
/// # Examples
///
/// ```
/// use u_loadout::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_working_pool_size(20);
/// assert_eq!(config.working_pool_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyConfig {
    /// Number of top-weighted modules considered per construction.
    ///
    /// Bounds the cost of one construction independently of the
    /// inventory size.
    pub working_pool_size: usize,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            working_pool_size: 50,
        }
    }
}

impl GreedyConfig {
    /// Sets the working pool size.
    pub fn with_working_pool_size(mut self, n: usize) -> Self {
        self.working_pool_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.working_pool_size == 0 {
            return Err("working_pool_size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_config_defaults() {
        assert_eq!(GreedyConfig::default().working_pool_size, 50);
        assert!(GreedyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_greedy_config_rejects_empty_pool() {
        assert!(GreedyConfig::default()
            .with_working_pool_size(0)
            .validate()
            .is_err());
    }
}
