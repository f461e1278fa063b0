//! Configuration for the preference engine
//!
//! Controls candidate eligibility, progress reporting, and how much work the
//! conflict resolver may do.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a [`PreferenceGraph`](crate::PreferenceGraph)
///
/// # Examples
///
/// ```
/// use prefgraph_engine::GraphConfig;
///
/// let config = GraphConfig::default();
/// assert_eq!(config.max_candidate_degree, 10);
/// assert_eq!(config.max_conflict_edges, None);
///
/// let config = GraphConfig::bounded(12);
/// assert_eq!(config.max_conflict_edges, Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Nodes with this many edges or more are never recommended
    /// Default: 10
    pub max_candidate_degree: usize,

    /// Minimum seconds between progress lines during batch ingestion
    /// Default: 2
    pub progress_interval_secs: u64,

    /// Largest conflict edge set the resolver will search
    /// Default: None (unbounded)
    pub max_conflict_edges: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_candidate_degree: 10,
            progress_interval_secs: 2,
            max_conflict_edges: None,
        }
    }
}

impl GraphConfig {
    /// Default configuration with a cap on the resolver search
    ///
    /// The retraction search is exponential in the number of conflicting
    /// judgments. A cap turns a runaway search into a `ConflictTooLarge` error.
    pub fn bounded(max_conflict_edges: usize) -> Self {
        Self {
            max_conflict_edges: Some(max_conflict_edges),
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    ///
    /// Missing keys fall back to their defaults. The table may be given at the
    /// top level or under a `[graph]` section.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = contents.parse()?;
        let config: GraphConfig = match table.remove("graph") {
            Some(section) => section.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_conflict_edges == Some(0) {
            return Err(ConfigError::Invalid(
                "max_conflict_edges must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get progress interval as Duration
    pub fn progress_interval(&self) -> Duration {
        Duration::from_secs(self.progress_interval_secs)
    }
}
