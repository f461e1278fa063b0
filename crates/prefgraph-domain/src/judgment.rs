//! Judgment module - pairwise preferences between elements

use crate::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pairwise preference: `winner` is strictly preferred over `loser`
///
/// In the consistency graph a judgment becomes the edge `loser -> winner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Judgment {
    /// The less preferred element
    pub loser: ElementId,

    /// The preferred element
    pub winner: ElementId,
}

impl Judgment {
    /// Create a new judgment stating that `winner` beats `loser`
    pub fn new(loser: impl Into<ElementId>, winner: impl Into<ElementId>) -> Self {
        Self {
            loser: loser.into(),
            winner: winner.into(),
        }
    }

    /// Whether both sides name the same element
    pub fn is_reflexive(&self) -> bool {
        self.loser == self.winner
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.winner, self.loser)
    }
}

/// A raw comparison as produced by a rating platform
///
/// The sign of `score` carries the orientation: positive means `entity_b`
/// was preferred, negative means `entity_a` was. A zero score expresses no
/// preference and yields no judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedJudgment {
    /// First compared element
    pub entity_a: ElementId,

    /// Second compared element
    pub entity_b: ElementId,

    /// Signed preference score on the selected criterion
    pub score: f64,
}

impl SignedJudgment {
    /// Create a new signed judgment
    pub fn new(entity_a: impl Into<ElementId>, entity_b: impl Into<ElementId>, score: f64) -> Self {
        Self {
            entity_a: entity_a.into(),
            entity_b: entity_b.into(),
            score,
        }
    }

    /// Orient the comparison into a `(loser, winner)` judgment
    ///
    /// # Examples
    ///
    /// ```
    /// use prefgraph_domain::{Judgment, SignedJudgment};
    ///
    /// let raw = SignedJudgment::new("a", "b", 3.5);
    /// assert_eq!(raw.to_judgment(), Some(Judgment::new("a", "b")));
    ///
    /// let raw = SignedJudgment::new("a", "b", -1.0);
    /// assert_eq!(raw.to_judgment(), Some(Judgment::new("b", "a")));
    ///
    /// assert_eq!(SignedJudgment::new("a", "b", 0.0).to_judgment(), None);
    /// ```
    pub fn to_judgment(&self) -> Option<Judgment> {
        if self.score > 0.0 {
            Some(Judgment::new(self.entity_a.clone(), self.entity_b.clone()))
        } else if self.score < 0.0 {
            Some(Judgment::new(self.entity_b.clone(), self.entity_a.clone()))
        } else {
            // Zero and NaN carry no preference
            None
        }
    }
}
