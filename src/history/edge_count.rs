//! Edge count -> iteration index multimap.
//!
//! Two graphs with different numbers of present edges cannot be equal, so the
//! tracker only compares full matrices between iterations that share a count.
//! The index is a necessary, not sufficient, filter.

use hashbrown::HashMap;

/// Iterations grouped by the number of present edges they ended with.
#[derive(Clone, Debug, Default)]
pub struct EdgeCountIndex {
    by_count: HashMap<usize, Vec<usize>>,
    entries: usize,
}

impl EdgeCountIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that iteration `index` ended with `edge_count` present edges.
    pub fn insert(&mut self, edge_count: usize, index: usize) {
        self.by_count.entry(edge_count).or_default().push(index);
        self.entries += 1;
    }

    /// Iterations recorded with `edge_count`, oldest first.
    pub fn candidates_for(&self, edge_count: usize) -> &[usize] {
        self.by_count
            .get(&edge_count)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of recorded iterations.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of distinct edge counts seen.
    #[inline]
    pub fn distinct_counts(&self) -> usize {
        self.by_count.len()
    }
}
