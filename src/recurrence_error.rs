//! RecurrenceError: Unified error type for graph-recurrence public APIs
//!
//! Recoverable input problems (ragged rows, mismatched dimensions) are reported
//! through this type. Contract violations on the primary accessors still panic;
//! their `try_*` companions return the matching variant instead.

use thiserror::Error;

/// Unified error type for graph-recurrence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    /// A matrix did not have the node count the tracker was built for.
    #[error("Dimension mismatch: expected {expected} nodes, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// A row of a nested matrix had the wrong length.
    #[error("Matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// status(i, j) != status(j, i).
    #[error("Asymmetric edge status between nodes {i} and {j}")]
    AsymmetricStatus { i: usize, j: usize },
    /// A node carries a non-absent status towards itself.
    #[error("Self edge on node {node}")]
    SelfEdge { node: usize },
    /// A node id outside `0..n_nodes`.
    #[error("Node {node} out of range for a graph of {n_nodes} nodes")]
    NodeOutOfRange { node: usize, n_nodes: usize },
    /// Positional access past the end of the history.
    #[error("History index {index} out of range (len {len})")]
    HistoryOutOfRange { index: usize, len: usize },
    /// More matrices were requested than the history holds.
    #[error("Requested {requested} matrices but only {available} are stored")]
    InsufficientHistory { requested: usize, available: usize },
    /// Stored snapshots are not ordered newest first.
    #[error("History out of order at position {position}: index {found} after {previous}")]
    HistoryOrder {
        position: usize,
        previous: usize,
        found: usize,
    },
    /// Tracker bookkeeping counters disagree with each other.
    #[error("Tracker bookkeeping inconsistent: {0}")]
    Bookkeeping(String),
    /// The external refinement step failed.
    #[error("Refinement step failed: {0}")]
    Refinement(String),
}
