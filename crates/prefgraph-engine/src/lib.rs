//! Prefgraph Engine
//!
//! Incremental preference-consistency graph for pairwise judgments.
//!
//! # Overview
//!
//! The engine is responsible for:
//! - **Ingestion**: Accepting `(loser, winner)` judgments one at a time, in the order they were made
//! - **Conflict resolution**: Retracting the oldest judgments needed when a new one contradicts the graph
//! - **Ancestry**: Tracking, for every element, which elements are known to be worse or better
//! - **Elevation**: Estimating the ripple effect of either answer to a comparison
//! - **Recommendation**: Picking the incomparable pair most worth asking about next
//! - **Render plans**: Exposing positions and counts for an external plotter
//!
//! The graph is kept acyclic after every call. Everything runs synchronously
//! and in memory; datasets, remote APIs and drawing belong to callers.
//!
//! # Usage
//!
//! ```
//! use prefgraph_domain::Judgment;
//! use prefgraph_engine::{GraphConfig, PreferenceGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = PreferenceGraph::new(GraphConfig::default());
//!
//! let metrics = graph.add_evaluations(vec![
//!     Judgment::new("a", "b"),
//!     Judgment::new("b", "c"),
//!     Judgment::new("c", "a"),
//!     Judgment::new("d", "e"),
//! ])?;
//! println!("{}", metrics.summary());
//!
//! if let Some(next) = graph.recommend().first() {
//!     println!("Compare {} with {} {:?}", next.first, next.second, next.elevation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The engine can be configured via TOML:
//!
//! ```toml
//! [graph]
//! max_candidate_degree = 10
//! progress_interval_secs = 2
//! max_conflict_edges = 24
//! ```

#![warn(missing_docs)]

mod ancestry;
mod config;
mod elevation;
mod error;
mod graph;
mod log;
mod metrics;
mod recommend;
mod render;
mod resolver;

pub use config::GraphConfig;
pub use elevation::Elevation;
pub use error::{ConfigError, GraphError};
pub use graph::PreferenceGraph;
pub use metrics::IngestMetrics;
pub use recommend::Recommendation;
pub use render::{NodePlacement, PlotPoint, RenderPlan};
