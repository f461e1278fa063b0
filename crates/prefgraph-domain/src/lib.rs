//! Prefgraph Domain Layer
//!
//! This crate holds the value objects shared between the preference engine
//! and the collaborators that feed it. It carries no graph logic and depends
//! only on `serde`, so dataset readers and API clients can produce judgments
//! without pulling in the engine.
//!
//! ## Key Concepts
//!
//! - **Element**: An opaque comparable item (a video id, for instance)
//! - **Judgment**: An ordered pair `(loser, winner)` - the winner is strictly preferred
//! - **Signed judgment**: A raw comparison with a signed score, as delivered upstream
//! - **Judgment source**: Anything that yields judgments in their original order

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod judgment;
pub mod traits;

// Re-exports for convenience
pub use element::ElementId;
pub use judgment::{Judgment, SignedJudgment};
pub use traits::JudgmentSource;
