//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! 1. Split the permutations of `0..n` by their first element; branch `k`
//!    holds every permutation starting with resource `k`
//! 2. Within a branch, walk the remaining positions in lexicographic order
//!    with [`next_permutation`], scoring each complete assignment
//! 3. Keep the lowest jealousy seen; a later permutation replaces the
//!    incumbent only if strictly better
//! 4. Combine branches in order `0..n`, again keeping the earlier on ties
//!
//! Branches in order, each in lexicographic order, is the global
//! lexicographic order, so the winner is the lexicographically first
//! jealousy-minimal permutation whether branches run sequentially or in
//! parallel.
//!
//! # Cost
//!
//! `n!` evaluations of `O(n + conflicts)` each. Intractable past roughly
//! ten colonists; see [`ExhaustiveConfig::max_colonists`].

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::ExhaustiveConfig;
use super::permutations::next_permutation;
use crate::error::{ColonyError, Result, StateError};
use crate::jealousy::Instance;

/// Result of an exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveResult {
    /// Jealousy-minimal bijection: `assignment[c]` is colonist `c`'s
    /// resource.
    pub assignment: Vec<usize>,
    /// Jealousy of `assignment`. No bijection does better.
    pub jealousy: usize,
    /// Permutations actually scored.
    pub evaluated: u64,
    /// Size of the search space, `n!`.
    pub search_space: u64,
}

/// Exhaustive search runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Finds a jealousy-minimal bijection by enumerating all of them.
    ///
    /// # Errors
    ///
    /// `StateError::NotBijective` or `StateError::MissingPreferences` if
    /// the instance is not a complete 1:1 colony, `StateError::TooLarge`
    /// above `config.max_colonists`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_colony::jealousy::Instance;
    /// use u_colony::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
    ///
    /// let instance = Instance::new(
    ///     3,
    ///     vec![vec![0, 1, 2], vec![1, 2, 0], vec![1, 2, 0]],
    ///     &[(0, 1), (1, 2)],
    /// ).unwrap();
    /// let result = ExhaustiveRunner::run(&instance, &ExhaustiveConfig::default()).unwrap();
    /// assert_eq!(result.jealousy, 1);
    /// ```
    pub fn run(instance: &Instance, config: &ExhaustiveConfig) -> Result<ExhaustiveResult> {
        config.validate().map_err(ColonyError::invalid_config)?;
        instance.require_bijective()?;

        let n = instance.colonist_count();
        if n > config.max_colonists {
            tracing::warn!(
                colonists = n,
                limit = config.max_colonists,
                "refusing exhaustive search"
            );
            return Err(StateError::TooLarge {
                colonists: n,
                limit: config.max_colonists,
            }
            .into());
        }

        let search_space = factorial(n);
        let mut branches = run_branches(instance, config).into_iter();
        let Some(mut best) = branches.next() else {
            // The empty colony has exactly one (empty) assignment.
            return Ok(ExhaustiveResult {
                assignment: Vec::new(),
                jealousy: 0,
                evaluated: 1,
                search_space,
            });
        };

        let mut evaluated = best.evaluated;
        for branch in branches {
            evaluated += branch.evaluated;
            if branch.jealousy < best.jealousy {
                best = branch;
            }
        }

        tracing::debug!(
            colonists = n,
            jealousy = best.jealousy,
            evaluated,
            search_space,
            "exhaustive search finished"
        );

        Ok(ExhaustiveResult {
            assignment: best.assignment,
            jealousy: best.jealousy,
            evaluated,
            search_space,
        })
    }
}

/// Best permutation within one first-element branch.
struct Branch {
    assignment: Vec<usize>,
    jealousy: usize,
    evaluated: u64,
}

#[cfg(feature = "parallel")]
fn run_branches(instance: &Instance, config: &ExhaustiveConfig) -> Vec<Branch> {
    if config.parallel {
        // `collect` preserves branch order.
        (0..instance.colonist_count())
            .into_par_iter()
            .map(|first| search_branch(instance, first, config.short_circuit))
            .collect()
    } else {
        run_branches_sequential(instance, config)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_branches(instance: &Instance, config: &ExhaustiveConfig) -> Vec<Branch> {
    run_branches_sequential(instance, config)
}

fn run_branches_sequential(instance: &Instance, config: &ExhaustiveConfig) -> Vec<Branch> {
    let mut branches = Vec::new();
    for first in 0..instance.colonist_count() {
        let branch = search_branch(instance, first, config.short_circuit);
        let done = config.short_circuit && branch.jealousy == 0;
        tracing::trace!(first, jealousy = branch.jealousy, "branch searched");
        branches.push(branch);
        if done {
            break;
        }
    }
    branches
}

fn search_branch(instance: &Instance, first: usize, short_circuit: bool) -> Branch {
    let n = instance.colonist_count();
    let mut perm: Vec<usize> = std::iter::once(first)
        .chain((0..n).filter(|&r| r != first))
        .collect();

    let mut best = perm.clone();
    let mut best_jealousy = instance.jealousy(&perm);
    let mut evaluated = 1;

    while !(short_circuit && best_jealousy == 0) && next_permutation(&mut perm[1..]) {
        evaluated += 1;
        let jealousy = instance.jealousy(&perm);
        if jealousy < best_jealousy {
            best_jealousy = jealousy;
            best.copy_from_slice(&perm);
        }
    }

    Branch {
        assignment: best,
        jealousy: best_jealousy,
        evaluated,
    }
}

fn factorial(n: usize) -> u64 {
    (1..=n as u64).product()
}
