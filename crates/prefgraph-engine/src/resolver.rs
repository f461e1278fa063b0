//! Conflict resolution - choosing which older judgments to retract
//!
//! When a new judgment `loser -> winner` arrives while the graph already
//! holds a path `winner -> ... -> loser`, some of the judgments on those paths
//! must go. The resolver picks the retraction set by a nested search:
//!
//! 1. Collect every edge lying on some `winner -> loser` path, sorted oldest
//!    first by their position in the judgment log.
//! 2. For each prefix length `m` of that list, and for each size `k` in
//!    `1..=m`, try the `k`-combinations of the first `m` edges in
//!    lexicographic order.
//! 3. The first combination whose removal disconnects `winner` from `loser`
//!    is the retraction.
//!
//! Older judgments are therefore preferred over fewer ones, and among
//! combinations of one prefix the smaller set wins.

use crate::ancestry::{reachable, reaching};
use crate::graph::{Edge, NodeIdx, PreferenceDag};
use crate::log::JudgmentLog;
use petgraph::algo::has_path_connecting;
use petgraph::visit::EdgeFiltered;
use std::collections::HashSet;

/// Outcome of a retraction search
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RetractionPlan {
    /// Edges to remove, oldest first. Empty when no set worked.
    pub edges: Vec<Edge>,

    /// Number of candidate sets tested
    pub combinations_tested: usize,
}

/// Edges on at least one path from `winner` to `loser`, oldest first
///
/// The graph is acyclic before the new judgment is added, so every such
/// path is simple and an edge `(u, v)` qualifies exactly when `u` is reachable
/// from `winner` and `loser` is reachable from `v`.
pub(crate) fn conflict_edges(
    dag: &PreferenceDag,
    log: &JudgmentLog,
    winner: NodeIdx,
    loser: NodeIdx,
) -> Vec<Edge> {
    let mut from_winner = reachable(dag, winner);
    from_winner.insert(winner);
    let mut to_loser = reaching(dag, loser);
    to_loser.insert(loser);

    log.iter()
        .filter(|(from, to)| from_winner.contains(from) && to_loser.contains(to))
        .collect()
}

/// Search for the first retraction set that breaks every `winner -> loser` path
///
/// `candidates` must be sorted oldest first. A combination that avoids the
/// newest edge of the current prefix was already tested at a shorter prefix,
/// so only combinations containing that edge are tried; the order of first
/// success is unchanged.
pub(crate) fn plan_retraction(
    dag: &PreferenceDag,
    winner: NodeIdx,
    loser: NodeIdx,
    candidates: &[Edge],
) -> RetractionPlan {
    let mut tested = 0;

    for maxindex in 1..=candidates.len() {
        let newest = candidates[maxindex - 1];

        for size in 1..=maxindex {
            for combo in Combinations::new(maxindex - 1, size - 1) {
                let mut removed: Vec<Edge> = combo.iter().map(|&i| candidates[i]).collect();
                removed.push(newest);
                tested += 1;

                if !reachable_without(dag, winner, loser, &removed) {
                    return RetractionPlan {
                        edges: removed,
                        combinations_tested: tested,
                    };
                }
            }
        }
    }

    RetractionPlan {
        edges: Vec::new(),
        combinations_tested: tested,
    }
}

/// Whether `to` is reachable from `from` once `removed` edges are ignored
pub(crate) fn reachable_without(
    dag: &PreferenceDag,
    from: NodeIdx,
    to: NodeIdx,
    removed: &[Edge],
) -> bool {
    let removed: HashSet<Edge> = removed.iter().copied().collect();
    let filtered = EdgeFiltered::from_fn(dag, |edge: (NodeIdx, NodeIdx, &())| {
        !removed.contains(&(edge.0, edge.1))
    });
    has_path_connecting(&filtered, from, to, None)
}

/// Lexicographic `k`-combinations of `0..n`
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost slot that has not reached its maximum
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Every prefix, every size, every combination, in order
    fn exhaustive_retraction(
        dag: &PreferenceDag,
        winner: NodeIdx,
        loser: NodeIdx,
        candidates: &[Edge],
    ) -> Vec<Edge> {
        for maxindex in 0..=candidates.len() {
            for size in 1..=maxindex {
                for combo in Combinations::new(maxindex, size) {
                    let removed: Vec<Edge> = combo.iter().map(|&i| candidates[i]).collect();
                    if !reachable_without(dag, winner, loser, &removed) {
                        return removed;
                    }
                }
            }
        }
        Vec::new()
    }

    proptest! {
        /// Property: Skipping combinations without the newest edge picks the same set as the full search
        #[test]
        fn test_matches_exhaustive_search(
            raw in prop::collection::vec((0usize..7, 0usize..7), 0..12),
            pair in (0usize..7, 0usize..7),
        ) {
            let mut dag = PreferenceDag::new();
            let mut log = JudgmentLog::new();
            for (a, b) in raw {
                let edge = (a.min(b), a.max(b));
                if edge.0 != edge.1 && !dag.contains_edge(edge.0, edge.1) {
                    dag.add_edge(edge.0, edge.1, ());
                    log.append(edge);
                }
            }
            let (winner, loser) = (pair.0.min(pair.1), pair.0.max(pair.1));
            dag.add_node(winner);
            dag.add_node(loser);

            let candidates = conflict_edges(&dag, &log, winner, loser);
            let plan = plan_retraction(&dag, winner, loser, &candidates);
            prop_assert_eq!(plan.edges, exhaustive_retraction(&dag, winner, loser, &candidates));
        }

        /// Property: The retraction disconnects the pair and no strict subset of it does
        #[test]
        fn test_retraction_is_minimal(
            raw in prop::collection::vec((0usize..6, 0usize..6), 0..14),
            direct_at in 0usize..14,
        ) {
            // Forward-only edges keep the graph acyclic; 0 -> 5 guarantees a conflict
            let mut edges: Vec<Edge> = raw
                .into_iter()
                .map(|(a, b)| (a.min(b), a.max(b)))
                .filter(|(a, b)| a != b)
                .collect();
            let at = direct_at.min(edges.len());
            edges.insert(at, (0, 5));

            let mut dag = PreferenceDag::new();
            let mut log = JudgmentLog::new();
            for edge in edges {
                if !dag.contains_edge(edge.0, edge.1) {
                    dag.add_edge(edge.0, edge.1, ());
                    log.append(edge);
                }
            }

            let candidates = conflict_edges(&dag, &log, 0, 5);
            let plan = plan_retraction(&dag, 0, 5, &candidates);

            prop_assert!(!plan.edges.is_empty());
            prop_assert!(plan.edges.contains(&(0, 5)));
            prop_assert!(!reachable_without(&dag, 0, 5, &plan.edges));

            for skip in 0..plan.edges.len() {
                let subset: Vec<Edge> = plan
                    .edges
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &e)| e)
                    .collect();
                prop_assert!(reachable_without(&dag, 0, 5, &subset));
            }
        }
    }
}
