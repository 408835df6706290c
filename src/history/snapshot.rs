//! Immutable capture of the graph after one refinement iteration.
//!
//! A snapshot keeps two views of the same iteration: the full flattened
//! matrix, used for exact equality when looking for repeated states, and the
//! sparse set of lower-triangle edges whose status changed since the previous
//! state, keyed by [`TriangularIndex`] and holding the *previous* status.
//! Neither is derived from the other after construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::recurrence_error::RecurrenceError;
use crate::topology::{EdgeMatrix, EdgeStatus, TriangularIndex};

/// One edge whose status differs from the preceding iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeChange {
    /// Larger node id of the pair.
    pub row: usize,
    /// Smaller node id of the pair.
    pub col: usize,
    pub previous: EdgeStatus,
    pub current: EdgeStatus,
}

/// State of the graph at the end of one saved iteration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    index: usize,
    adjacency: EdgeMatrix,
    /// Triangular key -> status before this iteration.
    changed_edges: BTreeMap<usize, EdgeStatus>,
}

impl GraphSnapshot {
    /// Copy `current` and record every lower-triangle edge where it differs
    /// from `previous`.
    ///
    /// Only the lower triangle is scanned; both matrices are expected to be
    /// symmetric already.
    pub fn capture(
        index: usize,
        current: &EdgeMatrix,
        previous: &EdgeMatrix,
    ) -> Result<Self, RecurrenceError> {
        if current.n_nodes() != previous.n_nodes() {
            return Err(RecurrenceError::DimensionMismatch {
                expected: current.n_nodes(),
                found: previous.n_nodes(),
            });
        }
        let changed_edges = previous
            .lower_differences(current)
            .map(|(i, j, before, _)| (TriangularIndex::forward(i, j), before))
            .collect();
        Ok(Self {
            index,
            adjacency: current.clone(),
            changed_edges,
        })
    }

    /// Iteration index assigned when this snapshot was saved.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn adjacency(&self) -> &EdgeMatrix {
        &self.adjacency
    }

    /// Triangular key -> previous status, for every changed edge.
    #[inline]
    pub fn changed_edges(&self) -> &BTreeMap<usize, EdgeStatus> {
        &self.changed_edges
    }

    /// `true` if this iteration left every edge as it found it.
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.changed_edges.is_empty()
    }

    /// Changed edges decoded into node pairs, in key order.
    pub fn changes(&self) -> impl Iterator<Item = EdgeChange> + '_ {
        self.changed_edges.iter().map(move |(&key, &previous)| {
            let (row, col) = TriangularIndex::inverse(key);
            EdgeChange {
                row,
                col,
                previous,
                current: self.adjacency.get(row, col),
            }
        })
    }
}
