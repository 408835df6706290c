//! Cycle tracking for iterative graph refinement.
//!
//! [`CycleTracker`] owns the per-iteration history and answers whether the
//! refinement has started repeating itself. [`run_refinement`] wraps it in the
//! outer loop for callers that do not drive the iterations themselves.

pub mod config;
pub mod cycle_tracker;
pub mod driver;
pub mod environment;

pub use config::TrackerConfig;
pub use cycle_tracker::{CycleTracker, TrackerStats};
pub use driver::{RefinementOutcome, run_refinement};
pub use environment::{MatrixEnvironment, RefinementEnvironment};
