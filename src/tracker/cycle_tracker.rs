//! `CycleTracker`: iteration history and repeat detection for graph refinement.
//!
//! The outer refinement loop calls [`CycleTracker::save`] once per completed
//! iteration and then [`CycleTracker::has_cycle`]. Iteration indices are
//! assigned in save order starting at 0.
//!
//! # Bootstrap save
//! The state saved first is compared against the graph that existed before
//! any refinement, not against an earlier refinement result. It is therefore
//! only registered in the [`EdgeCountIndex`]; no snapshot is stored for it,
//! and after `M` saves the history holds `M - 1` snapshots.
//!
//! # Detection
//! A cycle exists when the newest matrix is identical to the matrix of an
//! earlier iteration. Candidates come from the edge-count index (same number
//! of present edges), are scanned newest to oldest so the shortest period wins,
//! and each is confirmed by comparing all `n * n` entries. The period is cached
//! and never reset: once found, the tracker stays in the cycle-found state.

use std::num::NonZeroUsize;

use crate::debug_invariants::DebugInvariants;
use crate::history::{EdgeCountIndex, GraphSnapshot, History};
use crate::recurrence_error::RecurrenceError;
use crate::topology::EdgeMatrix;
use crate::tracker::environment::RefinementEnvironment;

/// Counters describing how much work cycle detection has done.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackerStats {
    /// Calls to `save` that succeeded.
    pub saves: usize,
    /// Earlier iterations sharing the newest edge count that were examined.
    pub candidates_considered: usize,
    /// Full `n * n` matrix comparisons performed.
    pub full_comparisons: usize,
    /// Earlier stored iterations skipped because their edge count differed.
    pub skipped_by_edge_count: usize,
}

/// Records every refinement iteration and detects when the sequence repeats.
#[derive(Clone, Debug)]
pub struct CycleTracker {
    n_nodes: usize,
    history: History,
    edge_counts: EdgeCountIndex,
    /// Number of save operations performed; also the next iteration index.
    n_saved: usize,
    last_edge_count: Option<usize>,
    /// Newest iteration already searched without finding a repeat.
    searched_through: Option<usize>,
    cycle: Option<NonZeroUsize>,
    stats: TrackerStats,
}

impl CycleTracker {
    /// Tracker for graphs of `n_nodes` nodes.
    pub fn new(n_nodes: usize) -> Self {
        Self {
            n_nodes,
            history: History::new(),
            edge_counts: EdgeCountIndex::new(),
            n_saved: 0,
            last_edge_count: None,
            searched_through: None,
            cycle: None,
            stats: TrackerStats::default(),
        }
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Record the state reached by the latest iteration.
    ///
    /// `previous` is the matrix the iteration started from and `edge_count`
    /// the number of present edges in `current`. Returns the index assigned
    /// to this iteration. On error nothing is recorded.
    pub fn save(
        &mut self,
        current: &EdgeMatrix,
        previous: &EdgeMatrix,
        edge_count: usize,
    ) -> Result<usize, RecurrenceError> {
        for m in [current, previous] {
            if m.n_nodes() != self.n_nodes {
                return Err(RecurrenceError::DimensionMismatch {
                    expected: self.n_nodes,
                    found: m.n_nodes(),
                });
            }
        }
        crate::debug_invariants!(current.validate_invariants(), "CycleTracker::save current matrix");

        let index = self.n_saved;
        let snapshot = if index == 0 {
            None
        } else {
            Some(GraphSnapshot::capture(index, current, previous)?)
        };

        self.n_saved += 1;
        self.stats.saves += 1;
        self.edge_counts.insert(edge_count, index);
        self.last_edge_count = Some(edge_count);

        match snapshot {
            Some(snapshot) => {
                log::debug!(
                    "saved iteration {index}: {edge_count} edges, {} changed",
                    snapshot.changed_edges().len()
                );
                self.history.append(snapshot);
            }
            None => log::debug!("registered bootstrap iteration with {edge_count} edges"),
        }
        Ok(index)
    }

    /// [`save`](Self::save) reading its inputs from an environment.
    pub fn save_from<E>(&mut self, env: &E) -> Result<usize, RecurrenceError>
    where
        E: RefinementEnvironment + ?Sized,
    {
        self.save(env.current(), env.previous(), env.edge_count())
    }

    /// Search for an earlier iteration identical to the newest one.
    ///
    /// Returns the cycle period, or `None` while the sequence has not
    /// repeated. Once a period is found it is returned by every later call.
    /// Each iteration is searched at most once; asking again before the next
    /// save returns the earlier answer without comparing anything.
    pub fn detect(&mut self) -> Option<NonZeroUsize> {
        if self.cycle.is_some() {
            return self.cycle;
        }
        let edge_count = self.last_edge_count?;
        let latest = self.history.latest()?;
        let current = latest.index();
        if self.searched_through == Some(current) {
            return None;
        }
        let current_matrix = latest.adjacency();
        let candidates = self.edge_counts.candidates_for(edge_count);

        let same_count = candidates.iter().filter(|&&c| c != 0 && c < current).count();
        self.stats.skipped_by_edge_count += (current - 1) - same_count;

        for &candidate in candidates.iter().rev() {
            // the newest iteration is itself a candidate
            let Some(period) = NonZeroUsize::new(current - candidate) else {
                continue;
            };
            self.stats.candidates_considered += 1;
            if candidate == 0 {
                log::trace!("skipping bootstrap iteration: no stored matrix");
                continue;
            }
            let snapshot = self.history.get(period.get());
            debug_assert_eq!(snapshot.index(), candidate);

            self.stats.full_comparisons += 1;
            log::trace!("comparing iteration {current} with iteration {candidate}");
            if snapshot.adjacency() == current_matrix {
                log::info!(
                    "cycle detected: iteration {current} repeats iteration {candidate} (period {period})"
                );
                self.cycle = Some(period);
                return self.cycle;
            }
        }
        self.searched_through = Some(current);
        None
    }

    /// `true` once the newest iteration repeats an earlier one.
    pub fn has_cycle(&mut self) -> bool {
        self.detect().is_some()
    }

    /// Newest iteration searched without finding a repeat, if any.
    #[inline]
    pub fn searched_through(&self) -> Option<usize> {
        self.searched_through
    }

    /// Cached cycle period.
    #[inline]
    pub fn cycle(&self) -> Option<NonZeroUsize> {
        self.cycle
    }

    /// Cached cycle period, or 0 while no cycle has been found.
    #[inline]
    pub fn cycle_size(&self) -> usize {
        self.cycle.map_or(0, NonZeroUsize::get)
    }

    /// The `size` most recently stored matrices, newest first.
    ///
    /// # Panics
    /// If `size` exceeds the number of stored snapshots.
    pub fn adj_matrices(&self, size: usize) -> Vec<EdgeMatrix> {
        match self.try_adj_matrices(size) {
            Ok(matrices) => matrices,
            Err(e) => panic!("CycleTracker::adj_matrices: {e}"),
        }
    }

    /// Fallible form of [`adj_matrices`](Self::adj_matrices).
    pub fn try_adj_matrices(&self, size: usize) -> Result<Vec<EdgeMatrix>, RecurrenceError> {
        if size > self.history.len() {
            return Err(RecurrenceError::InsufficientHistory {
                requested: size,
                available: self.history.len(),
            });
        }
        Ok(self
            .history
            .iter()
            .take(size)
            .map(|s| s.adjacency().clone())
            .collect())
    }

    /// Matrices spanning the detected cycle, newest first.
    pub fn cycle_matrices(&self) -> Option<Vec<EdgeMatrix>> {
        self.cycle.map(|period| self.adj_matrices(period.get()))
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn edge_counts(&self) -> &EdgeCountIndex {
        &self.edge_counts
    }

    /// Number of save operations performed.
    #[inline]
    pub fn saves(&self) -> usize {
        self.n_saved
    }

    #[inline]
    pub fn stats(&self) -> &TrackerStats {
        &self.stats
    }
}

impl DebugInvariants for CycleTracker {
    fn validate_invariants(&self) -> Result<(), RecurrenceError> {
        if self.history.len() != self.n_saved.saturating_sub(1) {
            return Err(RecurrenceError::Bookkeeping(format!(
                "{} snapshots after {} saves",
                self.history.len(),
                self.n_saved
            )));
        }
        if self.edge_counts.len() != self.n_saved {
            return Err(RecurrenceError::Bookkeeping(format!(
                "{} edge-count entries after {} saves",
                self.edge_counts.len(),
                self.n_saved
            )));
        }
        if let Some(latest) = self.history.latest() {
            if latest.index() + 1 != self.n_saved {
                return Err(RecurrenceError::Bookkeeping(format!(
                    "newest snapshot has index {} after {} saves",
                    latest.index(),
                    self.n_saved
                )));
            }
            if latest.adjacency().n_nodes() != self.n_nodes {
                return Err(RecurrenceError::DimensionMismatch {
                    expected: self.n_nodes,
                    found: latest.adjacency().n_nodes(),
                });
            }
        }
        if let Some(period) = self.cycle {
            if period.get() > self.history.len() {
                return Err(RecurrenceError::Bookkeeping(format!(
                    "cycle period {period} exceeds history of {}",
                    self.history.len()
                )));
            }
        }
        self.history.validate_invariants()
    }
}
