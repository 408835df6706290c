//! Graph state representation shared by the history and the tracker.
//!
//! It includes:
//! - [`EdgeStatus`], the opaque per-edge status code
//! - [`EdgeMatrix`], the flattened symmetric status matrix
//! - [`TriangularIndex`], the pair <-> key mapping over the lower triangle

pub mod matrix;
pub mod status;
pub mod triangular;

pub use matrix::EdgeMatrix;
pub use status::EdgeStatus;
pub use triangular::TriangularIndex;
