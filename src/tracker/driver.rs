//! Outer refinement loop with cycle-based termination.
//!
//! [`run_refinement`] alternates a caller-supplied refinement step with
//! [`CycleTracker::save_from`] and [`CycleTracker::detect`]. It stops as soon
//! as the sequence of graphs repeats and hands back the matrices spanning the
//! cycle, ready for a consensus step. A graph that stops changing is a cycle
//! of period 1.

use std::num::NonZeroUsize;

use crate::debug_invariants::DebugInvariants;
use crate::recurrence_error::RecurrenceError;
use crate::topology::EdgeMatrix;
use crate::tracker::config::TrackerConfig;
use crate::tracker::cycle_tracker::CycleTracker;
use crate::tracker::environment::RefinementEnvironment;

/// How a refinement run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefinementOutcome {
    /// The newest graph repeats one seen `period` iterations earlier.
    Cycle {
        period: NonZeroUsize,
        /// Refinement steps executed, including the one that closed the cycle.
        iterations: usize,
        /// The `period` newest matrices, newest first.
        matrices: Vec<EdgeMatrix>,
    },
    /// `max_iterations` steps ran without a repeat.
    IterationLimit { iterations: usize },
}

impl RefinementOutcome {
    /// Cycle period, if the run ended on a cycle.
    pub fn period(&self) -> Option<NonZeroUsize> {
        match self {
            RefinementOutcome::Cycle { period, .. } => Some(*period),
            RefinementOutcome::IterationLimit { .. } => None,
        }
    }

    pub fn iterations(&self) -> usize {
        match self {
            RefinementOutcome::Cycle { iterations, .. }
            | RefinementOutcome::IterationLimit { iterations } => *iterations,
        }
    }
}

/// Run `step` on `env` until `tracker` sees a cycle or the iteration limit
/// is reached.
///
/// Each call to `step` must leave `env` in a consistent state: the tracker
/// reads it right after the call returns. Errors from `step`, from saving,
/// and (with `check_invariants`) from invariant validation end the run.
pub fn run_refinement<E, F>(
    tracker: &mut CycleTracker,
    env: &mut E,
    config: &TrackerConfig,
    mut step: F,
) -> Result<RefinementOutcome, RecurrenceError>
where
    E: RefinementEnvironment,
    F: FnMut(&mut E) -> Result<(), RecurrenceError>,
{
    for iteration in 1..=config.max_iterations {
        step(env)?;
        tracker.save_from(&*env)?;
        if config.check_invariants {
            tracker.validate_invariants()?;
        }
        if let Some(period) = tracker.detect() {
            let matrices = tracker.try_adj_matrices(period.get())?;
            return Ok(RefinementOutcome::Cycle {
                period,
                iterations: iteration,
                matrices,
            });
        }
    }
    log::warn!(
        "no cycle after {} refinement iterations; giving up",
        config.max_iterations
    );
    Ok(RefinementOutcome::IterationLimit {
        iterations: config.max_iterations,
    })
}
