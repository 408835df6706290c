#![allow(dead_code)]

use graph_recurrence::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Random symmetric matrix whose off-diagonal codes are drawn from `0..codes`.
pub fn random_matrix(rng: &mut SmallRng, n_nodes: usize, codes: i32) -> EdgeMatrix {
    let mut m = EdgeMatrix::new(n_nodes);
    for (i, j) in TriangularIndex::pairs(n_nodes) {
        m.set(i, j, EdgeStatus::new(rng.gen_range(0..codes)))
            .expect("pair in range");
    }
    m
}

/// Save `states` in order, the first one as bootstrap against `initial`.
pub fn save_all(tracker: &mut CycleTracker, initial: &EdgeMatrix, states: &[EdgeMatrix]) {
    let mut previous = initial.clone();
    for state in states {
        tracker
            .save(state, &previous, state.present_edges())
            .expect("save");
        previous = state.clone();
    }
}
