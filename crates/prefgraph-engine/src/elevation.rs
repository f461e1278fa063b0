//! Elevation scoring for incomparable pairs
//!
//! The elevation of `a -> b` estimates how many ancestor/descendant
//! relationships would shift if `b` were declared better than `a`. Each
//! direction is scored independently so the caller can see how informative
//! either answer to a comparison would be.

use crate::ancestry::AncestryIndex;
use crate::graph::NodeIdx;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Costs of asserting each direction of preference between two elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Elevation {
    /// Cost of declaring the second element preferred over the first
    pub forward: usize,

    /// Cost of declaring the first element preferred over the second
    pub backward: usize,
}

impl Elevation {
    /// The cheaper of the two directions
    pub fn min(&self) -> usize {
        self.forward.min(self.backward)
    }

    /// The costlier of the two directions
    pub fn max(&self) -> usize {
        self.forward.max(self.backward)
    }

    /// The same costs seen from the other element
    pub fn swapped(&self) -> Self {
        Self {
            forward: self.backward,
            backward: self.forward,
        }
    }

    /// Ordering key for recommendation: higher is better
    pub fn rank_key(&self) -> (usize, usize) {
        (self.min(), self.max())
    }
}

impl From<Elevation> for (usize, usize) {
    fn from(elevation: Elevation) -> Self {
        (elevation.forward, elevation.backward)
    }
}

/// Score both directions for an incomparable pair
pub(crate) fn elevation(index: &AncestryIndex, a: NodeIdx, b: NodeIdx) -> Elevation {
    Elevation {
        forward: elevate(index, a, b),
        backward: elevate(index, b, a),
    }
}

/// Cost of asserting that `high` is preferred over `low`
fn elevate(index: &AncestryIndex, low: NodeIdx, high: NodeIdx) -> usize {
    let low_anc = index.ancestors(low);
    let low_desc = index.descendants(low);
    let high_anc = index.ancestors(high);
    let high_desc = index.descendants(high);

    // Relations both nodes already share need no re-evaluation either way
    let shared: HashSet<NodeIdx> = low_anc
        .intersection(high_anc)
        .chain(low_desc.intersection(high_desc))
        .copied()
        .collect();

    let mut cost = high_desc.difference(low_desc).count() + low_anc.difference(high_anc).count() + 2;

    for &n in low_anc.difference(&shared) {
        cost += high_desc.difference(index.descendants(n)).count() + 1;
    }
    for &n in low_desc.difference(&shared) {
        cost += low_anc.difference(index.ancestors(n)).count() + 1;
    }

    cost
}
