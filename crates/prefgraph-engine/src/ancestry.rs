//! Ancestry index - transitive worse/better sets per node

use crate::graph::{NodeIdx, PreferenceDag};
use petgraph::visit::{Dfs, Reversed};
use std::collections::HashSet;

/// Cached reachability for every node of a graph snapshot
///
/// `ancestors(n)` are the nodes with a path to `n` (judged worse),
/// `descendants(n)` the nodes reachable from `n` (judged better). The index
/// is rebuilt from scratch whenever it is needed after a mutation.
#[derive(Debug, Clone, Default)]
pub(crate) struct AncestryIndex {
    ancestors: Vec<HashSet<NodeIdx>>,
    descendants: Vec<HashSet<NodeIdx>>,
}

impl AncestryIndex {
    /// Compute ancestors and descendants for nodes `0..node_count`
    pub fn rebuild(dag: &PreferenceDag, node_count: usize) -> Self {
        let mut index = Self {
            ancestors: vec![HashSet::new(); node_count],
            descendants: vec![HashSet::new(); node_count],
        };

        for node in dag.nodes() {
            index.descendants[node] = reachable(dag, node);
            index.ancestors[node] = reaching(dag, node);
        }

        index
    }

    pub fn ancestors(&self, node: NodeIdx) -> &HashSet<NodeIdx> {
        &self.ancestors[node]
    }

    pub fn descendants(&self, node: NodeIdx) -> &HashSet<NodeIdx> {
        &self.descendants[node]
    }

    /// Whether either node is known to be worse than the other
    pub fn are_ordered(&self, a: NodeIdx, b: NodeIdx) -> bool {
        self.ancestors[b].contains(&a) || self.ancestors[a].contains(&b)
    }
}

/// Nodes reachable from `start`, excluding `start` itself
pub(crate) fn reachable(dag: &PreferenceDag, start: NodeIdx) -> HashSet<NodeIdx> {
    let mut dfs = Dfs::new(dag, start);
    let mut seen = HashSet::new();
    while let Some(node) = dfs.next(dag) {
        if node != start {
            seen.insert(node);
        }
    }
    seen
}

/// Nodes with a path to `target`, excluding `target` itself
pub(crate) fn reaching(dag: &PreferenceDag, target: NodeIdx) -> HashSet<NodeIdx> {
    let reversed = Reversed(dag);
    let mut dfs = Dfs::new(reversed, target);
    let mut seen = HashSet::new();
    while let Some(node) = dfs.next(reversed) {
        if node != target {
            seen.insert(node);
        }
    }
    seen
}
