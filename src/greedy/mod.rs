//! Greedy first-choice assignment.
//!
//! The cheapest of the three strategies: one pass over the colonists in
//! insertion order, each taking its most preferred resource still
//! available. Works for any colonist/resource ratio.

mod runner;

pub use runner::{GreedyResult, GreedyRunner};
