#![cfg_attr(docsrs, feature(doc_cfg))]
//! # graph-recurrence
//!
//! graph-recurrence keeps the iteration history of an iterative graph-refinement
//! procedure, such as the consistency loop of a causal-network reconstruction,
//! and detects when the sequence of produced graphs starts repeating instead of
//! converging. When it does, the tracker hands back the matrices spanning the
//! cycle so a consensus step can merge them into one graph.
//!
//! ## Features
//! - Flattened, symmetric edge-status matrices with opaque status codes
//! - Lower-triangle pair indexing with an exact floating-point inverse
//! - Per-iteration snapshots holding both the full matrix and the changed edges
//! - Edge-count filtering so only plausible repeats are compared entry by entry
//! - An optional driver running the refinement loop until a cycle or a limit
//!
//! ## Usage
//! ```rust
//! use graph_recurrence::prelude::*;
//!
//! let m0 = EdgeMatrix::complete(3);
//! let mut m1 = m0.clone();
//! m1.remove_edge(0, 1).unwrap();
//! let mut m2 = m0.clone();
//! m2.remove_edge(1, 2).unwrap();
//!
//! let mut tracker = CycleTracker::new(3);
//! let mut previous = m0.clone();
//! for state in [&m0, &m1, &m2, &m1] {
//!     tracker.save(state, &previous, state.present_edges()).unwrap();
//!     previous = state.clone();
//! }
//! assert!(tracker.has_cycle());
//! assert_eq!(tracker.cycle_size(), 2);
//! assert_eq!(tracker.adj_matrices(2), vec![m1, m2]);
//! ```
//!
//! ## Error handling
//! Input validation returns [`RecurrenceError`](recurrence_error::RecurrenceError).
//! Asking for history that does not exist through [`History::get`](history::History::get)
//! or [`CycleTracker::adj_matrices`](tracker::CycleTracker::adj_matrices) is a
//! programming error and panics; the `try_*` variants return an error instead.
//!
//! ## Logging
//! Saves and comparisons are reported through the [`log`] facade at `debug`
//! and `trace` level, detected cycles at `info`. No logger is installed.

pub mod debug_invariants;
pub mod history;
pub mod recurrence_error;
pub mod topology;
pub mod tracker;

pub use debug_invariants::DebugInvariants;
pub use recurrence_error::RecurrenceError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::history::{EdgeChange, EdgeCountIndex, GraphSnapshot, History};
    pub use crate::recurrence_error::RecurrenceError;
    pub use crate::topology::{EdgeMatrix, EdgeStatus, TriangularIndex};
    pub use crate::tracker::{
        CycleTracker, MatrixEnvironment, RefinementEnvironment, RefinementOutcome,
        TrackerConfig, TrackerStats, run_refinement,
    };
}
