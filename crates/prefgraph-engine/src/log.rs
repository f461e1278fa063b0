//! Judgment log - accepted judgments in insertion order

use crate::graph::Edge;

/// Append-only record of accepted judgments, oldest first
///
/// Retraction removes an entry outright; the relative order of the
/// survivors is never disturbed.
#[derive(Debug, Clone, Default)]
pub(crate) struct JudgmentLog {
    entries: Vec<Edge>,
}

impl JudgmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a judgment as the newest entry
    pub fn append(&mut self, edge: Edge) {
        self.entries.push(edge);
    }

    /// Position of a judgment, 0 being the oldest
    pub fn position(&self, edge: Edge) -> Option<usize> {
        self.entries.iter().position(|&e| e == edge)
    }

    /// Remove a judgment, returning where it sat
    pub fn remove(&mut self, edge: Edge) -> Option<usize> {
        let pos = self.position(edge)?;
        self.entries.remove(pos);
        Some(pos)
    }

    /// Iterate entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = JudgmentLog::new();
        log.append((0, 1));
        log.append((1, 2));
        log.append((2, 0));

        assert_eq!(log.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(log.position((1, 2)), Some(1));
        assert_eq!(log.position((1, 0)), None);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut log = JudgmentLog::new();
        for edge in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            log.append(edge);
        }

        assert_eq!(log.remove((1, 2)), Some(1));
        assert_eq!(log.remove((1, 2)), None);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec![(0, 1), (2, 3), (3, 4)]);
        assert_eq!(log.len(), 3);
    }
}
