//! Consistency graph - the DAG of currently accepted judgments

use crate::ancestry::AncestryIndex;
use crate::elevation::{self, Elevation};
use crate::log::JudgmentLog;
use crate::resolver;
use crate::{GraphConfig, GraphError, IngestMetrics};
use petgraph::algo::{has_path_connecting, is_cyclic_directed};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use prefgraph_domain::{ElementId, Judgment, JudgmentSource};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::time::Instant;

/// Dense index of an element inside the graph
pub(crate) type NodeIdx = usize;

/// A judgment as stored internally: `(loser, winner)`
pub(crate) type Edge = (NodeIdx, NodeIdx);

/// Edge `loser -> winner` for every accepted judgment
pub(crate) type PreferenceDag = DiGraphMap<NodeIdx, ()>;

/// Incremental preference-consistency graph
///
/// Judgments are ingested one at a time, in the order they were made. When a
/// judgment contradicts what the graph already implies, the oldest judgments
/// responsible are retracted so the graph stays acyclic.
///
/// # Examples
///
/// ```
/// use prefgraph_engine::PreferenceGraph;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = PreferenceGraph::default();
/// graph.add_evaluation("a", "b")?;
/// graph.add_evaluation("b", "c")?;
///
/// // c > a is implied, so a > c contradicts and retracts the oldest judgment
/// let retracted = graph.add_evaluation("c", "a")?;
/// assert!(retracted);
/// assert!(graph.is_consistent());
/// assert_eq!(graph.edge_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceGraph {
    config: GraphConfig,
    ids: Vec<ElementId>,
    index: HashMap<ElementId, NodeIdx>,
    dag: PreferenceDag,
    log: JudgmentLog,
    ancestry: OnceCell<AncestryIndex>,
    metrics: IngestMetrics,
}

impl Default for PreferenceGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl PreferenceGraph {
    /// Create an empty graph with the given configuration
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            ids: Vec::new(),
            index: HashMap::new(),
            dag: PreferenceDag::new(),
            log: JudgmentLog::new(),
            ancestry: OnceCell::new(),
            metrics: IngestMetrics::new(),
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Get a reference to the ingestion metrics
    pub fn metrics(&self) -> &IngestMetrics {
        &self.metrics
    }

    /// Drop every element, judgment and counter
    pub fn reset(&mut self) {
        self.ids.clear();
        self.index.clear();
        self.dag.clear();
        self.log.clear();
        self.ancestry.take();
        self.metrics.reset();
    }

    /// Record that `winner` is preferred over `loser`
    ///
    /// Unseen elements are created. If the graph already implies the
    /// opposite, the conflict resolver retracts older judgments first.
    /// Re-stating a judgment that is already in the graph changes nothing.
    ///
    /// Returns whether any judgment was retracted.
    pub fn add_evaluation(
        &mut self,
        loser: impl Into<ElementId>,
        winner: impl Into<ElementId>,
    ) -> Result<bool, GraphError> {
        let judgment = Judgment::new(loser, winner);
        if judgment.is_reflexive() {
            return Err(GraphError::SelfJudgment(judgment.loser));
        }
        let Judgment { loser, winner } = judgment;

        let mut has_retracted = false;
        let known = (
            self.index.get(&loser).copied(),
            self.index.get(&winner).copied(),
        );
        if let (Some(l), Some(w)) = known {
            if self.dag.contains_edge(l, w) {
                tracing::debug!("Ignoring duplicate judgment: {} > {}", winner, loser);
                self.metrics.record_duplicate();
                return Ok(false);
            }
            has_retracted = !self.resolve_indexed(l, w)?.is_empty();
        }

        let l = self.intern(loser);
        let w = self.intern(winner);
        self.log.append((l, w));
        self.dag.add_edge(l, w, ());
        self.ancestry.take();
        self.metrics.record_ingested();

        debug_assert!(!is_cyclic_directed(&self.dag), "graph must stay acyclic");
        Ok(has_retracted)
    }

    /// Ingest judgments in order, logging progress periodically
    ///
    /// Judgments that are rejected (self judgments, conflicts over the
    /// configured cap) are skipped and counted in
    /// [`IngestMetrics::refused`]. Only an invariant violation stops the batch.
    ///
    /// Returns the metrics accumulated so far.
    pub fn add_evaluations<I>(&mut self, judgments: I) -> Result<IngestMetrics, GraphError>
    where
        I: IntoIterator<Item = Judgment>,
    {
        let interval = self.config.progress_interval();
        let mut last_report = Instant::now();

        for (i, judgment) in judgments.into_iter().enumerate() {
            match self.add_evaluation(judgment.loser, judgment.winner) {
                Ok(_) => {}
                Err(e @ GraphError::InvariantViolation(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!("Skipping comparison {}: {}", i, e);
                    self.metrics.record_refused();
                }
            }

            if last_report.elapsed() > interval {
                tracing::info!("Adding comparisons - {}", i);
                last_report = Instant::now();
            }
        }

        tracing::info!(
            "Ingestion complete: {} elements, {} judgments, {} retracted",
            self.node_count(),
            self.edge_count(),
            self.metrics.judgments_retracted
        );

        Ok(self.metrics.clone())
    }

    /// Pull every judgment from a source and ingest it
    pub fn ingest<S>(&mut self, source: &mut S) -> Result<IngestMetrics, GraphError>
    where
        S: JudgmentSource,
        S::Error: std::fmt::Display,
    {
        let judgments = source
            .judgments()
            .map_err(|e| GraphError::Source(e.to_string()))?;
        self.add_evaluations(judgments)
    }

    /// Retract older judgments so that `winner` can be preferred over `loser`
    ///
    /// Does nothing when the graph does not prefer `loser` over `winner`.
    /// Returns the retracted judgments, oldest first.
    pub fn resolve(
        &mut self,
        loser: &ElementId,
        winner: &ElementId,
    ) -> Result<Vec<Judgment>, GraphError> {
        let l = self.lookup(loser)?;
        let w = self.lookup(winner)?;
        let retracted = self.resolve_indexed(l, w)?;
        Ok(retracted.into_iter().map(|edge| self.judgment(edge)).collect())
    }

    fn resolve_indexed(&mut self, loser: NodeIdx, winner: NodeIdx) -> Result<Vec<Edge>, GraphError> {
        if !has_path_connecting(&self.dag, winner, loser, None) {
            return Ok(Vec::new());
        }

        let candidates = resolver::conflict_edges(&self.dag, &self.log, winner, loser);
        if let Some(max) = self.config.max_conflict_edges {
            if candidates.len() > max {
                tracing::warn!(
                    "Refusing {} > {}: {} conflicting judgments exceed the cap of {}",
                    self.ids[winner],
                    self.ids[loser],
                    candidates.len(),
                    max
                );
                return Err(GraphError::ConflictTooLarge {
                    edges: candidates.len(),
                    max,
                });
            }
        }

        let plan = resolver::plan_retraction(&self.dag, winner, loser, &candidates);
        if plan.edges.is_empty() {
            return Err(GraphError::InvariantViolation(format!(
                "no retraction among {} judgments separates {} from {}",
                candidates.len(),
                self.ids[winner],
                self.ids[loser]
            )));
        }

        let total = self.log.len();
        for &edge in &plan.edges {
            if let Some(pos) = self.log.remove(edge) {
                tracing::info!(
                    "Removed comparison: {} > {} (oldest {}/{} cmps)",
                    self.ids[edge.1],
                    self.ids[edge.0],
                    total - pos,
                    total
                );
            }
            self.dag.remove_edge(edge.0, edge.1);
        }
        self.ancestry.take();

        if has_path_connecting(&self.dag, winner, loser, None) {
            return Err(GraphError::InvariantViolation(format!(
                "a path still exists from {} to {} after resolution",
                self.ids[winner],
                self.ids[loser]
            )));
        }

        self.metrics
            .record_conflict(candidates.len(), plan.edges.len(), plan.combinations_tested);
        Ok(plan.edges)
    }

    /// Rebuild the ancestry index now instead of on first use
    pub fn rebuild_ancestry(&mut self) {
        self.ancestry.take();
        let _ = self.ancestry();
    }

    /// Ancestry index for the current edge set, built lazily
    pub(crate) fn ancestry(&self) -> &AncestryIndex {
        self.ancestry
            .get_or_init(|| AncestryIndex::rebuild(&self.dag, self.ids.len()))
    }

    /// Elements known to be worse than `id`
    pub fn ancestors(&self, id: &ElementId) -> Result<Vec<&ElementId>, GraphError> {
        let n = self.lookup(id)?;
        Ok(self.sorted_ids(self.ancestry().ancestors(n).iter().copied()))
    }

    /// Elements known to be better than `id`
    pub fn descendants(&self, id: &ElementId) -> Result<Vec<&ElementId>, GraphError> {
        let n = self.lookup(id)?;
        Ok(self.sorted_ids(self.ancestry().descendants(n).iter().copied()))
    }

    /// Whether the graph already orders `a` and `b` in either direction
    pub fn are_ordered(&self, a: &ElementId, b: &ElementId) -> Result<bool, GraphError> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        Ok(self.ancestry().are_ordered(a, b))
    }

    /// Whether the graph implies `better` is preferred over `worse`
    pub fn prefers(&self, better: &ElementId, worse: &ElementId) -> bool {
        match (self.index.get(better), self.index.get(worse)) {
            (Some(&b), Some(&w)) => b != w && has_path_connecting(&self.dag, w, b, None),
            _ => false,
        }
    }

    /// Elevation costs for an incomparable pair
    pub fn elevation(&self, a: &ElementId, b: &ElementId) -> Result<Elevation, GraphError> {
        let ai = self.lookup(a)?;
        let bi = self.lookup(b)?;
        if ai == bi || self.ancestry().are_ordered(ai, bi) {
            return Err(GraphError::AlreadyOrdered(a.clone(), b.clone()));
        }
        Ok(elevation::elevation(self.ancestry(), ai, bi))
    }

    /// Accepted judgments, oldest first
    pub fn judgments(&self) -> Vec<Judgment> {
        self.log.iter().map(|edge| self.judgment(edge)).collect()
    }

    /// Every element seen so far, in order of first appearance
    pub fn elements(&self) -> impl Iterator<Item = &ElementId> + '_ {
        self.ids.iter()
    }

    /// Whether the element has been seen
    pub fn contains(&self, id: &ElementId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of judgments touching the element
    pub fn degree(&self, id: &ElementId) -> Result<usize, GraphError> {
        Ok(self.degree_of(self.lookup(id)?))
    }

    /// Number of elements
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of accepted judgments
    pub fn edge_count(&self) -> usize {
        self.dag.edge_count()
    }

    /// Whether the graph is free of contradictions
    pub fn is_consistent(&self) -> bool {
        !is_cyclic_directed(&self.dag)
    }

    pub(crate) fn dag(&self) -> &PreferenceDag {
        &self.dag
    }

    pub(crate) fn id(&self, node: NodeIdx) -> &ElementId {
        &self.ids[node]
    }

    pub(crate) fn degree_of(&self, node: NodeIdx) -> usize {
        self.dag.neighbors_directed(node, Direction::Incoming).count()
            + self.dag.neighbors_directed(node, Direction::Outgoing).count()
    }

    fn lookup(&self, id: &ElementId) -> Result<NodeIdx, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownElement(id.clone()))
    }

    fn intern(&mut self, id: ElementId) -> NodeIdx {
        if let Some(&n) = self.index.get(&id) {
            return n;
        }
        let n = self.ids.len();
        self.ids.push(id.clone());
        self.index.insert(id, n);
        self.dag.add_node(n);
        n
    }

    fn judgment(&self, (loser, winner): Edge) -> Judgment {
        Judgment::new(self.ids[loser].clone(), self.ids[winner].clone())
    }

    fn sorted_ids(&self, nodes: impl Iterator<Item = NodeIdx>) -> Vec<&ElementId> {
        let mut nodes: Vec<NodeIdx> = nodes.collect();
        nodes.sort_unstable();
        nodes.into_iter().map(|n| &self.ids[n]).collect()
    }
}
