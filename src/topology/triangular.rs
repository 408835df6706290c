//! Linear indexing of the strict lower triangle of an adjacency matrix.
//!
//! An unordered pair `{i, j}` with `i != j` is stored under the key
//! `k = col + row * (row - 1) / 2` where `row = max(i, j)` and
//! `col = min(i, j)`. Keys of a graph with `n` nodes cover `0..n(n-1)/2`
//! without gaps, ordered row by row.
//!
//! The inverse starts from the closed form
//! `row = floor(0.5 + sqrt(0.25 + 2k))`, which is off by one for some keys
//! sitting on a triangular number once `2k` no longer has an exact `f64`
//! square root. [`TriangularIndex::inverse`] corrects the estimate with integer
//! arithmetic, so `forward(inverse(k)) == k` holds for every key.

/// Bidirectional map between unordered node pairs and lower-triangle keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangularIndex;

impl TriangularIndex {
    /// Number of unordered pairs in a graph of `n_nodes` nodes.
    #[inline]
    pub const fn pair_count(n_nodes: usize) -> usize {
        n_nodes * n_nodes.saturating_sub(1) / 2
    }

    /// First key of `row`, i.e. the `row - 1`-th triangular number.
    #[inline]
    const fn row_start(row: usize) -> usize {
        row * row.saturating_sub(1) / 2
    }

    /// Key of the unordered pair `{i, j}`; the larger coordinate is the row.
    ///
    /// `i == j` has no key and is rejected in debug builds.
    #[inline]
    pub fn forward(i: usize, j: usize) -> usize {
        debug_assert_ne!(i, j, "diagonal entries have no triangular key");
        let (row, col) = if i > j { (i, j) } else { (j, i) };
        col + Self::row_start(row)
    }

    /// Pair `(row, col)` with `row > col` stored under key `k`.
    pub fn inverse(k: usize) -> (usize, usize) {
        let estimate = (0.5 + (0.25 + 2.0 * k as f64).sqrt()).floor() as usize;
        let mut row = estimate.max(1);
        while Self::row_start(row) > k {
            row -= 1;
        }
        while Self::row_start(row + 1) <= k {
            row += 1;
        }
        (row, k - Self::row_start(row))
    }

    /// All pairs `(row, col)` of a graph with `n_nodes` nodes, in key order.
    pub fn pairs(n_nodes: usize) -> impl Iterator<Item = (usize, usize)> {
        (1..n_nodes).flat_map(|row| (0..row).map(move |col| (row, col)))
    }
}
