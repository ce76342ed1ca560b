//! Local search over complete assignments.
//!
//! Starting from a bijection between colonists and resources, repeatedly
//! swaps the resources of two colonists whenever the swap strictly lowers
//! jealousy. Ends at a local optimum with respect to pairwise swaps, which
//! is not necessarily the global one. Requires a 1:1 colony.
//!
//! # References
//!
//! - Aarts, E. & Lenstra, J. K. (eds.) (1997). *Local Search in
//!   Combinatorial Optimization*. Wiley.

mod config;
mod runner;

pub use config::{LocalSearchConfig, StartStrategy};
pub use runner::{LocalSearchResult, LocalSearchRunner};
