//! Metrics collection for judgment ingestion

/// Counters collected while judgments are ingested
///
/// Tracks accepted, duplicate and conflicting judgments, plus how much work
/// the conflict resolver did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestMetrics {
    /// Judgments admitted into the graph
    pub ingested: usize,

    /// Judgments ignored because the same edge already existed
    pub duplicates: usize,

    /// Judgments skipped during batch ingestion because they were rejected
    pub refused: usize,

    /// Judgments that contradicted the graph and triggered a retraction
    pub conflicts_resolved: usize,

    /// Older judgments removed to restore consistency
    pub judgments_retracted: usize,

    /// Candidate retraction sets tested by the resolver
    pub combinations_tested: usize,

    /// Size of the largest conflict edge set seen
    pub largest_conflict: usize,
}

impl IngestMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an admitted judgment
    pub fn record_ingested(&mut self) {
        self.ingested += 1;
    }

    /// Record a duplicate judgment
    pub fn record_duplicate(&mut self) {
        self.duplicates += 1;
    }

    /// Record a judgment rejected during batch ingestion
    pub fn record_refused(&mut self) {
        self.refused += 1;
    }

    /// Record a resolved conflict
    pub fn record_conflict(&mut self, conflict_edges: usize, retracted: usize, tested: usize) {
        self.conflicts_resolved += 1;
        self.judgments_retracted += retracted;
        self.combinations_tested += tested;
        self.largest_conflict = self.largest_conflict.max(conflict_edges);
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Ingestion Metrics Summary".to_string(),
            "=========================".to_string(),
            format!("Judgments ingested: {}", self.ingested),
            format!("Duplicates ignored: {}", self.duplicates),
        ];

        if self.refused > 0 {
            lines.push(format!("Judgments refused: {}", self.refused));
        }

        if self.conflicts_resolved > 0 {
            lines.push(String::new());
            lines.push(format!("Conflicts resolved: {}", self.conflicts_resolved));
            lines.push(format!("  Judgments retracted: {}", self.judgments_retracted));
            lines.push(format!("  Combinations tested: {}", self.combinations_tested));
            lines.push(format!("  Largest conflict: {} judgments", self.largest_conflict));
        }

        lines.join("\n")
    }
}
