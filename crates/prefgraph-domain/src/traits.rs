//! Trait definitions for external interactions
//!
//! The engine never reads datasets or calls remote APIs itself. Those live in
//! collaborators that implement these traits.

use crate::{Judgment, SignedJudgment};

/// Trait for anything that supplies judgments in their original order
///
/// Ordering matters: the engine treats earlier judgments as older and
/// retracts them first when a contradiction shows up.
pub trait JudgmentSource {
    /// Error type for source operations
    type Error;

    /// Fetch every judgment, oldest first
    fn judgments(&mut self) -> Result<Vec<Judgment>, Self::Error>;
}

impl JudgmentSource for Vec<Judgment> {
    type Error = std::convert::Infallible;

    fn judgments(&mut self) -> Result<Vec<Judgment>, Self::Error> {
        Ok(std::mem::take(self))
    }
}

impl JudgmentSource for Vec<SignedJudgment> {
    type Error = std::convert::Infallible;

    /// Orients each raw comparison, dropping those without a preference
    fn judgments(&mut self) -> Result<Vec<Judgment>, Self::Error> {
        Ok(std::mem::take(self)
            .iter()
            .filter_map(SignedJudgment::to_judgment)
            .collect())
    }
}
