//! Jealousy-minimizing resource assignment for colonies.
//!
//! A colony is a set of colonists, each ranking every resource of a shared
//! pool, plus a symmetric conflict relation between colonists. A colonist
//! is *jealous* when a colonist it conflicts with holds a resource it
//! ranks above its own. This crate assigns one resource per colonist and
//! offers three strategies of increasing cost and quality:
//!
//! - **Greedy** ([`greedy`]): one pass in insertion order, each colonist
//!   takes its best remaining resource.
//! - **Local search** ([`local_search`]): first-improvement pairwise-swap
//!   hill climbing from a bijection; ends at a local optimum.
//! - **Exhaustive** ([`exhaustive`]): scores every bijection; a true
//!   optimum, at factorial cost.
//!
//! # Architecture
//!
//! [`Colony`] owns the entity model and validates every mutation. The
//! strategies never touch it directly: they run on a [`jealousy::Instance`],
//! an index-space snapshot, and the colony installs the winning assignment.
//!
//! # Example
//!
//! ```
//! use u_colony::Colony;
//! use u_colony::exhaustive::ExhaustiveConfig;
//!
//! let mut colony = Colony::generated(3);
//! colony.add_conflict("A", "B").unwrap();
//! colony.add_conflict("B", "C").unwrap();
//! colony.set_preferences("A", ["1", "2", "3"]).unwrap();
//! colony.set_preferences("B", ["2", "3", "1"]).unwrap();
//! colony.set_preferences("C", ["2", "3", "1"]).unwrap();
//!
//! let result = colony.assign_exhaustive(&ExhaustiveConfig::default()).unwrap();
//! assert_eq!(result.jealousy, 1);
//! assert_eq!(colony.jealousy(), 1);
//! ```

pub mod error;
pub mod exhaustive;
pub mod greedy;
pub mod jealousy;
pub mod local_search;
pub mod model;

pub use error::{ColonyError, Result, StateError, ValidationError};
pub use model::{Colonist, ColonistId, Colony};
