//! Exhaustive search for a jealousy-minimal assignment.
//!
//! Scores every bijection between colonists and resources and keeps the
//! best, so the result is a true optimum for a 1:1 colony. The price is
//! factorial running time: use it for small colonies only, and rely on
//! [`ExhaustiveConfig::max_colonists`] to refuse the rest.
//!
//! Permutations are produced lazily in lexicographic order
//! ([`Permutations`], [`next_permutation`]), so memory use does not grow
//! with the search space. Among equally good permutations the first one
//! in that order wins.

mod config;
mod permutations;
mod runner;

pub use config::ExhaustiveConfig;
pub use permutations::{next_permutation, Permutations};
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
