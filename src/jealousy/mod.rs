//! Jealousy evaluation.
//!
//! A colonist is jealous when a colonist it conflicts with holds a
//! resource it ranks strictly above its own. The colony-level score is the
//! number of jealous colonists, not the number of offending conflicts.
//!
//! All evaluation happens on an [`Instance`], a plain-data snapshot of the
//! colony in which colonists and resources are indices. Candidate
//! assignments are slices of resource indices, so searches can score and
//! discard them without mutating the colony.

mod instance;

pub use instance::Instance;
