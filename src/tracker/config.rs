use serde::{Deserialize, Serialize};

/// Settings for [`run_refinement`](crate::tracker::driver::run_refinement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Upper bound on refinement iterations before giving up on a cycle.
    pub max_iterations: usize,
    /// Validate tracker invariants after every save, even in release builds.
    pub check_invariants: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            check_invariants: false,
        }
    }
}
