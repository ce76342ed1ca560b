//! Pairwise-swap hill climbing.
//!
//! # Algorithm
//!
//! 1. Build the initial bijection (greedy, identity or shuffled)
//! 2. Scan unordered pairs `(i, j)`, `i < j`, in lexicographic order:
//!    a. Swap the resources of `i` and `j`
//!    b. Recompute jealousy on the tentative assignment
//!    c. If it strictly decreased, keep the swap and restart the scan
//!       at `(0, 1)`; otherwise undo it
//! 3. Stop after a full pass with no improving swap
//! 4. Repeat from shuffled bijections for each configured restart and
//!    keep the best local optimum
//!
//! This is first-improvement descent: it accepts the first improving
//! swap, not the best one. It terminates because every accepted swap
//! lowers a non-negative integer.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::config::{LocalSearchConfig, StartStrategy};
use crate::error::{ColonyError, Result};
use crate::greedy::GreedyRunner;
use crate::jealousy::Instance;

const DEFAULT_SEED: u64 = 42;

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult {
    /// Best bijection found: `assignment[c]` is colonist `c`'s resource.
    pub assignment: Vec<usize>,
    /// Jealousy of `assignment`.
    pub jealousy: usize,
    /// Swaps accepted during the winning descent.
    pub swaps: usize,
    /// Jealousy evaluations across all descents.
    pub evaluations: usize,
    /// Number of descents run. Restarts stop early once jealousy hits 0.
    pub starts: usize,
    /// Jealousy of the winning descent, at its start and after each
    /// accepted swap. Strictly decreasing.
    pub jealousy_history: Vec<usize>,
}

/// Local search runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs first-improvement swap descent on a 1:1 instance.
    ///
    /// # Errors
    ///
    /// `StateError` if the instance is not 1:1 or a colonist has no
    /// preferences, `ValidationError::InvalidConfig` for a bad config.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_colony::jealousy::Instance;
    /// use u_colony::local_search::{LocalSearchConfig, LocalSearchRunner, StartStrategy};
    ///
    /// let instance = Instance::new(2, vec![vec![0, 1], vec![1, 0]], &[(0, 1)]).unwrap();
    /// let config = LocalSearchConfig::default().with_start(StartStrategy::Identity);
    /// let result = LocalSearchRunner::run(&instance, &config).unwrap();
    /// assert_eq!(result.jealousy, 0);
    /// ```
    pub fn run(instance: &Instance, config: &LocalSearchConfig) -> Result<LocalSearchResult> {
        config.validate().map_err(ColonyError::invalid_config)?;
        instance.require_bijective()?;

        let n = instance.colonist_count();
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));

        let first = match config.start {
            StartStrategy::Greedy => GreedyRunner::run(instance)
                .as_complete()
                .unwrap_or_else(|| (0..n).collect()),
            StartStrategy::Identity => (0..n).collect(),
            StartStrategy::Shuffled => shuffled(n, &mut rng),
        };

        let mut best = descend(instance, first);
        let mut evaluations = best.evaluations;
        let mut starts = 1;

        for restart in 0..config.restarts {
            if best.jealousy == 0 {
                break;
            }
            let candidate = descend(instance, shuffled(n, &mut rng));
            starts += 1;
            evaluations += candidate.evaluations;
            if candidate.jealousy < best.jealousy {
                tracing::debug!(
                    restart,
                    jealousy = candidate.jealousy,
                    "restart improved best local optimum"
                );
                best = candidate;
            }
        }

        tracing::debug!(
            jealousy = best.jealousy,
            swaps = best.swaps,
            evaluations,
            "local search finished"
        );

        Ok(LocalSearchResult {
            assignment: best.assignment,
            jealousy: best.jealousy,
            swaps: best.swaps,
            evaluations,
            starts,
            jealousy_history: best.history,
        })
    }
}

/// Outcome of a single descent.
struct Descent {
    assignment: Vec<usize>,
    jealousy: usize,
    swaps: usize,
    evaluations: usize,
    history: Vec<usize>,
}

fn shuffled(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

fn descend(instance: &Instance, mut current: Vec<usize>) -> Descent {
    let n = current.len();
    let mut jealousy = instance.jealousy(&current);
    let mut history = vec![jealousy];
    let mut evaluations = 1;
    let mut swaps = 0;

    'scan: while jealousy > 0 {
        for i in 0..n {
            for j in (i + 1)..n {
                current.swap(i, j);
                evaluations += 1;
                let tentative = instance.jealousy(&current);
                if tentative < jealousy {
                    tracing::trace!(i, j, from = jealousy, to = tentative, "accepted swap");
                    jealousy = tentative;
                    swaps += 1;
                    history.push(jealousy);
                    continue 'scan;
                }
                current.swap(i, j);
            }
        }
        break;
    }

    Descent {
        assignment: current,
        jealousy,
        swaps,
        evaluations,
        history,
    }
}
