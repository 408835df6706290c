//! Per-iteration storage owned by the cycle tracker.
//!
//! - [`GraphSnapshot`]: full matrix plus sparse diff for one iteration
//! - [`History`]: newest-first sequence of snapshots
//! - [`EdgeCountIndex`]: edge count -> iterations, used to prune comparisons

pub mod edge_count;
pub mod list;
pub mod snapshot;

pub use edge_count::EdgeCountIndex;
pub use list::History;
pub use snapshot::{EdgeChange, GraphSnapshot};
