//! Newest-first sequence of saved snapshots.

use std::collections::VecDeque;

use crate::debug_invariants::DebugInvariants;
use crate::history::snapshot::GraphSnapshot;
use crate::recurrence_error::RecurrenceError;

/// Append-only history of snapshots; position 0 is the most recent one.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: VecDeque<GraphSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `snapshot` as the most recent entry.
    #[inline]
    pub fn append(&mut self, snapshot: GraphSnapshot) {
        self.snapshots.push_front(snapshot);
    }

    /// Snapshot at `position` counted from the newest.
    ///
    /// # Panics
    /// If `position >= self.len()`.
    pub fn get(&self, position: usize) -> &GraphSnapshot {
        match self.try_get(position) {
            Ok(snapshot) => snapshot,
            Err(e) => panic!("History::get: {e}"),
        }
    }

    /// Fallible form of [`History::get`].
    pub fn try_get(&self, position: usize) -> Result<&GraphSnapshot, RecurrenceError> {
        self.snapshots
            .get(position)
            .ok_or(RecurrenceError::HistoryOutOfRange {
                index: position,
                len: self.snapshots.len(),
            })
    }

    /// Most recent snapshot, if any.
    #[inline]
    pub fn latest(&self) -> Option<&GraphSnapshot> {
        self.snapshots.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots from newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GraphSnapshot> + ExactSizeIterator {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GraphSnapshot;
    type IntoIter = std::collections::vec_deque::Iter<'a, GraphSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

impl DebugInvariants for History {
    /// Indices strictly decrease from front to back and every snapshot has
    /// the dimension of the newest one.
    fn validate_invariants(&self) -> Result<(), RecurrenceError> {
        let Some(front) = self.snapshots.front() else {
            return Ok(());
        };
        let n_nodes = front.adjacency().n_nodes();
        let mut previous = None;
        for (position, snap) in self.snapshots.iter().enumerate() {
            if snap.adjacency().n_nodes() != n_nodes {
                return Err(RecurrenceError::DimensionMismatch {
                    expected: n_nodes,
                    found: snap.adjacency().n_nodes(),
                });
            }
            if let Some(prev) = previous {
                if snap.index() >= prev {
                    return Err(RecurrenceError::HistoryOrder {
                        position,
                        previous: prev,
                        found: snap.index(),
                    });
                }
            }
            previous = Some(snap.index());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::EdgeMatrix;

    fn snap(index: usize) -> GraphSnapshot {
        let m = EdgeMatrix::complete(3);
        GraphSnapshot::capture(index, &m, &m).unwrap()
    }

    #[test]
    fn append_puts_newest_first() {
        let mut h = History::new();
        assert!(h.is_empty());
        for i in 1..=3 {
            h.append(snap(i));
        }
        assert_eq!(h.len(), 3);
        assert_eq!(h.get(0).index(), 3);
        assert_eq!(h.get(2).index(), 1);
        assert_eq!(h.latest().map(GraphSnapshot::index), Some(3));
        let order: Vec<usize> = h.iter().map(GraphSnapshot::index).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert!(h.validate_invariants().is_ok());
    }

    #[test]
    fn try_get_out_of_range() {
        let mut h = History::new();
        h.append(snap(1));
        assert_eq!(
            h.try_get(1).unwrap_err(),
            RecurrenceError::HistoryOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let h = History::new();
        let _ = h.get(0);
    }

    #[test]
    fn out_of_order_history_is_invalid() {
        let mut h = History::new();
        h.append(snap(2));
        h.append(snap(1));
        assert_eq!(
            h.validate_invariants(),
            Err(RecurrenceError::HistoryOrder {
                position: 1,
                previous: 1,
                found: 2
            })
        );
    }
}
