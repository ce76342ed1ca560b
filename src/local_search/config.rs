//! Local search configuration.

/// How the first bijection handed to the hill climber is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartStrategy {
    /// The greedy assignment. Local search then never ends worse than
    /// greedy.
    #[default]
    Greedy,

    /// Colonist `i` gets resource `i`.
    Identity,

    /// A random bijection drawn from the configured seed.
    Shuffled,
}

/// Configuration for the pairwise-swap local search.
///
/// # Examples
///
/// ```
/// use u_colony::local_search::{LocalSearchConfig, StartStrategy};
///
/// let config = LocalSearchConfig::default()
///     .with_start(StartStrategy::Identity)
///     .with_restarts(4)
///     .with_seed(7);
/// assert_eq!(config.restarts, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Initial bijection for the first descent.
    pub start: StartStrategy,
    /// Additional descents from shuffled bijections. The best local optimum
    /// across all descents wins; ties keep the earliest.
    pub restarts: usize,
    /// Random seed for shuffled starts (None for the default seed).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            start: StartStrategy::default(),
            restarts: 0,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the start strategy.
    pub fn with_start(mut self, start: StartStrategy) -> Self {
        self.start = start;
        self
    }

    /// Sets the number of additional shuffled restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.restarts > 10_000 {
            return Err("restarts must be at most 10000".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_search_config_defaults() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.start, StartStrategy::Greedy);
        assert_eq!(config.restarts, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_search_config_builder() {
        let config = LocalSearchConfig::default()
            .with_start(StartStrategy::Shuffled)
            .with_restarts(3)
            .with_seed(123);
        assert_eq!(config.start, StartStrategy::Shuffled);
        assert_eq!(config.restarts, 3);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_local_search_config_rejects_huge_restarts() {
        let config = LocalSearchConfig::default().with_restarts(1_000_000);
        assert!(config.validate().is_err());
    }
}
