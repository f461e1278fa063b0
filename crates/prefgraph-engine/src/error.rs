//! Error types for the preference engine

use prefgraph_domain::ElementId;
use thiserror::Error;

/// Errors that can occur while maintaining the preference graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// A judgment compared an element with itself
    #[error("Self judgment: {0} cannot be preferred over itself")]
    SelfJudgment(ElementId),

    /// The element has never been judged
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// Elevation requested for a pair the graph already orders
    #[error("Elements already ordered: {0} and {1}")]
    AlreadyOrdered(ElementId, ElementId),

    /// The conflict involves more judgments than the configured cap
    #[error("Conflict too large: {edges} conflicting judgments (max: {max})")]
    ConflictTooLarge {
        /// Size of the conflict edge set
        edges: usize,
        /// Configured cap
        max: usize,
    },

    /// A contradiction survived conflict resolution
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The judgment source failed
    #[error("Source error: {0}")]
    Source(String),
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its accepted range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
