//! Read-only view of the refinement state consumed by the tracker.
//!
//! The refinement step owns the graph and mutates it between iterations. The
//! tracker only needs, at save time, the current matrix, the matrix as it was
//! before the iteration, and the current edge count. [`RefinementEnvironment`]
//! is that seam; [`MatrixEnvironment`] is a plain in-memory implementation.

use crate::recurrence_error::RecurrenceError;
use crate::topology::EdgeMatrix;

/// State a refinement step exposes once an iteration has completed.
///
/// Implementors must not mutate the matrices while the tracker reads them.
pub trait RefinementEnvironment {
    /// Matrix at the end of the latest iteration.
    fn current(&self) -> &EdgeMatrix;

    /// Matrix at the start of the latest iteration.
    fn previous(&self) -> &EdgeMatrix;

    fn n_nodes(&self) -> usize {
        self.current().n_nodes()
    }

    /// Number of present edges in [`current`](Self::current).
    fn edge_count(&self) -> usize {
        self.current().present_edges()
    }
}

/// In-memory environment holding the current and previous matrices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixEnvironment {
    current: EdgeMatrix,
    previous: EdgeMatrix,
}

impl MatrixEnvironment {
    /// Start from `initial`; before the first iteration both views agree.
    pub fn new(initial: EdgeMatrix) -> Self {
        Self {
            previous: initial.clone(),
            current: initial,
        }
    }

    /// Complete graph on `n_nodes` nodes with `forbidden` pairs removed up
    /// front. Forbidden pairs start absent in both views.
    pub fn with_forbidden(
        n_nodes: usize,
        forbidden: &[(usize, usize)],
    ) -> Result<Self, RecurrenceError> {
        let mut initial = EdgeMatrix::complete(n_nodes);
        for &(i, j) in forbidden {
            initial.remove_edge(i, j)?;
        }
        Ok(Self::new(initial))
    }

    /// Open a new iteration: the current matrix becomes the previous one and
    /// is returned for the refinement step to rewrite.
    pub fn begin_iteration(&mut self) -> &mut EdgeMatrix {
        self.previous.clone_from(&self.current);
        &mut self.current
    }

    /// Replace the current matrix wholesale, keeping the previous one.
    pub fn commit(&mut self, next: EdgeMatrix) -> Result<(), RecurrenceError> {
        if next.n_nodes() != self.current.n_nodes() {
            return Err(RecurrenceError::DimensionMismatch {
                expected: self.current.n_nodes(),
                found: next.n_nodes(),
            });
        }
        self.current = next;
        Ok(())
    }

    /// Shorthand for [`begin_iteration`](Self::begin_iteration) followed by
    /// [`commit`](Self::commit).
    pub fn advance(&mut self, next: EdgeMatrix) -> Result<(), RecurrenceError> {
        self.begin_iteration();
        self.commit(next)
    }
}

impl RefinementEnvironment for MatrixEnvironment {
    fn current(&self) -> &EdgeMatrix {
        &self.current
    }

    fn previous(&self) -> &EdgeMatrix {
        &self.previous
    }
}
