//! Exhaustive search configuration.

/// Configuration for the exhaustive permutation search.
///
/// The search evaluates up to `n!` assignments for `n` colonists, which is
/// about 3.6 million at `n = 10` and 479 million at `n = 12`. There is no
/// internal cancellation; [`max_colonists`](Self::max_colonists) is the
/// time bound.
///
/// # Examples
///
/// ```
/// use u_colony::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default()
///     .with_max_colonists(8)
///     .with_short_circuit(false);
/// assert_eq!(config.max_colonists, 8);
/// assert!(!config.short_circuit);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Largest colony the search accepts.
    pub max_colonists: usize,

    /// Stop at the first permutation with zero jealousy.
    ///
    /// Never changes the winner: zero is the minimum and ties go to the
    /// first permutation found.
    pub short_circuit: bool,

    /// Whether to split the search across threads using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to the sequential search, tie-break included.
    pub parallel: bool,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            max_colonists: 10,
            short_circuit: true,
            parallel: false,
        }
    }
}

impl ExhaustiveConfig {
    /// Sets the largest accepted colony.
    pub fn with_max_colonists(mut self, n: usize) -> Self {
        self.max_colonists = n;
        self
    }

    /// Enables or disables stopping at zero jealousy.
    pub fn with_short_circuit(mut self, short_circuit: bool) -> Self {
        self.short_circuit = short_circuit;
        self
    }

    /// Enables or disables the parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        // Permutation counters are u64; 21! would overflow.
        if self.max_colonists > 20 {
            return Err("max_colonists must be at most 20".into());
        }
        Ok(())
    }
}
