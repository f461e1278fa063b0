//! Recommender - picking the next most informative comparison

use crate::elevation::{self, Elevation};
use crate::graph::{NodeIdx, PreferenceGraph};
use prefgraph_domain::ElementId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A suggested comparison and its elevation costs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// First element, in order of first appearance
    pub first: ElementId,

    /// Second element
    pub second: ElementId,

    /// Costs of each answer: `forward` for `second > first`
    pub elevation: Elevation,
}

impl PreferenceGraph {
    /// Recommend the incomparable pair(s) most worth comparing next
    ///
    /// Candidates are pairs of elements that both have fewer than
    /// `max_candidate_degree` judgments and are not yet ordered. A pair beats
    /// another when its cheaper direction costs more, then when its costlier
    /// direction does. Every pair tied for best is returned; the result is
    /// empty when no candidate exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefgraph_engine::PreferenceGraph;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = PreferenceGraph::default();
    /// graph.add_evaluation("a", "b")?;
    /// graph.add_evaluation("c", "d")?;
    ///
    /// let best = graph.recommend();
    /// assert!(!best.is_empty());
    /// for rec in &best {
    ///     assert!(!graph.are_ordered(&rec.first, &rec.second)?);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn recommend(&self) -> Vec<Recommendation> {
        let index = self.ancestry();
        let max_degree = self.config().max_candidate_degree;

        let eligible: Vec<NodeIdx> = self
            .dag()
            .nodes()
            .filter(|&n| self.degree_of(n) < max_degree)
            .collect();

        let mut best: Vec<((NodeIdx, NodeIdx), Elevation)> = Vec::new();
        let mut scored = 0usize;

        for (i, &a) in eligible.iter().enumerate() {
            for &b in &eligible[i + 1..] {
                if index.are_ordered(a, b) {
                    continue;
                }
                scored += 1;
                offer(&mut best, (a, b), elevation::elevation(index, a, b));
            }
        }

        tracing::debug!(
            "Scored {} candidate pairs over {} eligible elements, {} tied for best",
            scored,
            eligible.len(),
            best.len()
        );

        best.into_iter()
            .map(|((a, b), elevation)| Recommendation {
                first: self.id(a).clone(),
                second: self.id(b).clone(),
                elevation,
            })
            .collect()
    }
}

/// Keep `candidate` if it ranks at least as high as the current best
///
/// Ranking only looks at `(min, max)`, so `(3, 5)` and `(5, 3)` tie.
fn offer<T>(best: &mut Vec<(T, Elevation)>, candidate: T, elevation: Elevation) {
    let ordering = match best.first() {
        Some((_, current)) => elevation.rank_key().cmp(&current.rank_key()),
        None => Ordering::Greater,
    };
    match ordering {
        Ordering::Greater => {
            best.clear();
            best.push((candidate, elevation));
        }
        Ordering::Equal => best.push((candidate, elevation)),
        Ordering::Less => {}
    }
}
