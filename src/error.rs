//! Error taxonomy for colony configuration and assignment.
//!
//! Every error is detected synchronously at the offending call and
//! returned to the caller; nothing is retried and nothing is partially
//! applied.

use thiserror::Error;

/// Rejected input: names, conflicts, preference lists or configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("colonist name must not be empty")]
    EmptyName,

    #[error("colonist {name} already exists")]
    DuplicateColonist { name: String },

    #[error("unknown colonist: {name}")]
    UnknownColonist { name: String },

    #[error("colonist {name} cannot conflict with itself")]
    SelfConflict { name: String },

    #[error("conflict between {first} and {second} already exists")]
    DuplicateConflict { first: String, second: String },

    /// The list does not cover the resource pool exactly once.
    #[error(
        "preferences for {name} do not match the resource pool \
         ({given} given, {distinct} distinct, {expected} expected)"
    )]
    MismatchedPreferences {
        name: String,
        expected: usize,
        distinct: usize,
        given: usize,
    },

    /// A stored list still names a resource dropped from the pool.
    #[error("preferences for {name} name {resource}, which is no longer in the resource pool")]
    StaleResource { name: String, resource: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// The colony is not in a state the requested operation supports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Local search and exhaustive search need one resource per colonist.
    #[error("{colonists} colonists but {resources} resources; a 1:1 colony is required")]
    NotBijective { colonists: usize, resources: usize },

    #[error("colonist {name} has no preferences")]
    MissingPreferences { name: String },

    #[error("{colonists} colonists exceed the exhaustive search limit of {limit}")]
    TooLarge { colonists: usize, limit: usize },
}

/// Any error returned by the colony engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColonyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}

pub type Result<T> = std::result::Result<T, ColonyError>;

impl ColonyError {
    pub(crate) fn unknown(name: &str) -> Self {
        ValidationError::UnknownColonist {
            name: name.to_string(),
        }
        .into()
    }

    pub(crate) fn invalid_config(reason: String) -> Self {
        ValidationError::InvalidConfig { reason }.into()
    }
}
