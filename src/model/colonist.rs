//! A single colonist.

use std::collections::BTreeSet;

/// Index of a colonist within its colony, in insertion order.
pub type ColonistId = usize;

/// A colonist: a name, a ranked preference list, rivals, and the resource
/// currently held.
///
/// Colonists are created and mutated through [`Colony`](super::Colony),
/// which keeps the preference and conflict invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Colonist {
    pub(crate) name: String,
    pub(crate) preferences: Vec<String>,
    pub(crate) conflicts: BTreeSet<ColonistId>,
    pub(crate) assigned: Option<String>,
}

impl Colonist {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            preferences: Vec::new(),
            conflicts: BTreeSet::new(),
            assigned: None,
        }
    }

    /// The colonist's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resources from most to least wanted. Empty until configured.
    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    /// Whether a preference list has been set.
    pub fn has_preferences(&self) -> bool {
        !self.preferences.is_empty()
    }

    /// Position of `resource` in the preference list (0 = most wanted).
    pub fn rank_of(&self, resource: &str) -> Option<usize> {
        self.preferences.iter().position(|r| r == resource)
    }

    /// Ids of the colonists this one conflicts with, ascending.
    pub fn conflicts(&self) -> impl Iterator<Item = ColonistId> + '_ {
        self.conflicts.iter().copied()
    }

    pub fn conflicts_with(&self, other: ColonistId) -> bool {
        self.conflicts.contains(&other)
    }

    /// The resource currently held, if any.
    pub fn assigned(&self) -> Option<&str> {
        self.assigned.as_deref()
    }
}
