//! Entity model: colonists, the resource pool and the conflict graph.
//!
//! Conflicts are stored as index sets on each colonist rather than
//! references, so the graph carries no ownership cycles. Assignment
//! strategies read the model through [`Colony::instance`] and write back
//! only the winning assignment.

mod colonist;
mod colony;

pub use colonist::{Colonist, ColonistId};
pub use colony::Colony;
