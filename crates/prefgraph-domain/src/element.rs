//! Element module - the items being compared

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a comparable item
///
/// Elements have no structure beyond equality and hashing. The engine maps
/// them to dense indices internally, so callers only ever deal with ids.
///
/// # Examples
///
/// ```
/// use prefgraph_domain::ElementId;
///
/// let id = ElementId::new("yt:dQw4w9WgXcQ");
/// assert_eq!(id.as_str(), "yt:dQw4w9WgXcQ");
/// assert_eq!(id, ElementId::from("yt:dQw4w9WgXcQ"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create an element id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
