//! Flattened, row-major edge-status matrix.
//!
//! `EdgeMatrix` stores `n_nodes * n_nodes` statuses contiguously so that
//! whole-graph equality is a single slice comparison. Writes go through
//! [`EdgeMatrix::set`], which updates both `(i, j)` and `(j, i)`; the diagonal
//! stays absent.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::recurrence_error::RecurrenceError;
use crate::topology::status::EdgeStatus;
use crate::topology::triangular::TriangularIndex;

/// Symmetric `n × n` matrix of edge statuses with an absent diagonal.
///
/// Deserialized input goes through the same checks as
/// [`EdgeMatrix::from_rows`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEdgeMatrix")]
pub struct EdgeMatrix {
    n_nodes: usize,
    data: Vec<EdgeStatus>,
}

/// Unchecked wire form of [`EdgeMatrix`].
#[derive(Deserialize)]
struct RawEdgeMatrix {
    n_nodes: usize,
    data: Vec<EdgeStatus>,
}

impl TryFrom<RawEdgeMatrix> for EdgeMatrix {
    type Error = RecurrenceError;

    fn try_from(raw: RawEdgeMatrix) -> Result<Self, Self::Error> {
        let m = EdgeMatrix {
            n_nodes: raw.n_nodes,
            data: raw.data,
        };
        m.validate_invariants()?;
        Ok(m)
    }
}

impl EdgeMatrix {
    /// Graph of `n_nodes` nodes and no edges.
    pub fn new(n_nodes: usize) -> Self {
        Self {
            n_nodes,
            data: vec![EdgeStatus::ABSENT; n_nodes * n_nodes],
        }
    }

    /// Complete graph: every off-diagonal pair present.
    ///
    /// This is the state refinement starts from before any pair is removed.
    pub fn complete(n_nodes: usize) -> Self {
        let mut m = Self::new(n_nodes);
        for (i, j) in TriangularIndex::pairs(n_nodes) {
            m.put(i, j, EdgeStatus::PRESENT);
        }
        m
    }

    /// Build from nested rows of raw status codes.
    ///
    /// Rows must form a square, symmetric matrix with an absent diagonal.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, RecurrenceError>
    where
        R: AsRef<[i32]>,
    {
        let n_nodes = rows.len();
        let mut data = Vec::with_capacity(n_nodes * n_nodes);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n_nodes {
                return Err(RecurrenceError::NotSquare {
                    row,
                    expected: n_nodes,
                    found: values.len(),
                });
            }
            data.extend(values.iter().copied().map(EdgeStatus::new));
        }
        let m = Self { n_nodes, data };
        m.validate_invariants()?;
        Ok(m)
    }

    /// Nested rows of raw status codes.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        if self.n_nodes == 0 {
            return Vec::new();
        }
        self.data
            .chunks(self.n_nodes)
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Row-major view of all `n_nodes * n_nodes` entries.
    #[inline]
    pub fn as_slice(&self) -> &[EdgeStatus] {
        &self.data
    }

    /// Status of `(i, j)`.
    ///
    /// # Panics
    /// If either node is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> EdgeStatus {
        assert!(
            i < self.n_nodes && j < self.n_nodes,
            "node pair ({i}, {j}) out of range for {} nodes",
            self.n_nodes
        );
        self.data[i * self.n_nodes + j]
    }

    /// Set the status of the unordered pair `{i, j}`.
    pub fn set(&mut self, i: usize, j: usize, status: EdgeStatus) -> Result<(), RecurrenceError> {
        for node in [i, j] {
            if node >= self.n_nodes {
                return Err(RecurrenceError::NodeOutOfRange {
                    node,
                    n_nodes: self.n_nodes,
                });
            }
        }
        if i == j {
            return Err(RecurrenceError::SelfEdge { node: i });
        }
        self.put(i, j, status);
        Ok(())
    }

    /// Mark `{i, j}` absent.
    pub fn remove_edge(&mut self, i: usize, j: usize) -> Result<(), RecurrenceError> {
        self.set(i, j, EdgeStatus::ABSENT)
    }

    #[inline]
    fn put(&mut self, i: usize, j: usize, status: EdgeStatus) {
        let n = self.n_nodes;
        self.data[i * n + j] = status;
        self.data[j * n + i] = status;
    }

    /// Lower-triangle entries `(row, col, status)` in triangular key order.
    pub fn lower_triangle(&self) -> impl Iterator<Item = (usize, usize, EdgeStatus)> + '_ {
        TriangularIndex::pairs(self.n_nodes).map(move |(i, j)| (i, j, self.data[i * self.n_nodes + j]))
    }

    /// Number of unordered pairs whose status is not absent.
    pub fn present_edges(&self) -> usize {
        self.lower_triangle().filter(|(_, _, s)| !s.is_absent()).count()
    }

    /// Lower-triangle positions where `self` and `other` differ, with the
    /// status each side holds there.
    ///
    /// # Panics
    /// If the matrices have different dimensions.
    pub fn lower_differences<'a>(
        &'a self,
        other: &'a EdgeMatrix,
    ) -> impl Iterator<Item = (usize, usize, EdgeStatus, EdgeStatus)> + 'a {
        assert_eq!(
            self.n_nodes, other.n_nodes,
            "cannot compare matrices of different dimensions"
        );
        self.lower_triangle()
            .zip_eq(other.lower_triangle())
            .filter(|((_, _, a), (_, _, b))| a != b)
            .map(|((i, j, a), (_, _, b))| (i, j, a, b))
    }
}

impl DebugInvariants for EdgeMatrix {
    fn validate_invariants(&self) -> Result<(), RecurrenceError> {
        let n = self.n_nodes;
        let expected = n.checked_mul(n);
        if expected != Some(self.data.len()) {
            return Err(RecurrenceError::DimensionMismatch {
                expected: expected.unwrap_or(usize::MAX),
                found: self.data.len(),
            });
        }
        for node in 0..n {
            if !self.data[node * n + node].is_absent() {
                return Err(RecurrenceError::SelfEdge { node });
            }
        }
        for (i, j) in TriangularIndex::pairs(n) {
            if self.data[i * n + j] != self.data[j * n + i] {
                return Err(RecurrenceError::AsymmetricStatus { i, j });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_complete() {
        let empty = EdgeMatrix::new(4);
        assert_eq!(empty.present_edges(), 0);
        let full = EdgeMatrix::complete(4);
        assert_eq!(full.present_edges(), 6);
        for i in 0..4 {
            assert_eq!(full.get(i, i), EdgeStatus::ABSENT);
        }
        assert!(full.validate_invariants().is_ok());
    }

    #[test]
    fn set_is_symmetric() {
        let mut m = EdgeMatrix::new(3);
        m.set(0, 2, EdgeStatus::new(2)).unwrap();
        assert_eq!(m.get(0, 2), EdgeStatus::new(2));
        assert_eq!(m.get(2, 0), EdgeStatus::new(2));
        assert_eq!(m.present_edges(), 1);
        m.remove_edge(2, 0).unwrap();
        assert_eq!(m, EdgeMatrix::new(3));
    }

    #[test]
    fn set_rejects_bad_pairs() {
        let mut m = EdgeMatrix::new(3);
        assert_eq!(
            m.set(1, 1, EdgeStatus::PRESENT),
            Err(RecurrenceError::SelfEdge { node: 1 })
        );
        assert_eq!(
            m.set(0, 3, EdgeStatus::PRESENT),
            Err(RecurrenceError::NodeOutOfRange { node: 3, n_nodes: 3 })
        );
    }

    #[test]
    fn from_rows_round_trip() {
        let rows = vec![vec![0, 1, 0], vec![1, 0, 2], vec![0, 2, 0]];
        let m = EdgeMatrix::from_rows(&rows).unwrap();
        assert_eq!(m.n_nodes(), 3);
        assert_eq!(m.get(1, 2), EdgeStatus::new(2));
        assert_eq!(m.to_rows(), rows);
    }

    #[test]
    fn from_rows_rejects_invalid_input() {
        let ragged = vec![vec![0, 1], vec![1]];
        assert_eq!(
            EdgeMatrix::from_rows(&ragged),
            Err(RecurrenceError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        let asym = vec![vec![0, 1], vec![0, 0]];
        assert_eq!(
            EdgeMatrix::from_rows(&asym),
            Err(RecurrenceError::AsymmetricStatus { i: 1, j: 0 })
        );
        let diag = vec![vec![1, 0], vec![0, 0]];
        assert_eq!(
            EdgeMatrix::from_rows(&diag),
            Err(RecurrenceError::SelfEdge { node: 0 })
        );
    }

    #[test]
    fn empty_graph_has_no_rows() {
        let m = EdgeMatrix::from_rows::<Vec<i32>>(&[]).unwrap();
        assert_eq!(m.n_nodes(), 0);
        assert!(m.to_rows().is_empty());
        assert_eq!(m.lower_triangle().count(), 0);
    }

    #[test]
    fn deserialize_validates_shape() {
        let err = serde_json::from_str::<EdgeMatrix>(r#"{"n_nodes":3,"data":[]}"#).unwrap_err();
        assert!(err.to_string().contains("Dimension mismatch"), "{err}");

        let asym = r#"{"n_nodes":2,"data":[0,1,0,0]}"#;
        assert!(serde_json::from_str::<EdgeMatrix>(asym).is_err());
        let diag = r#"{"n_nodes":2,"data":[1,0,0,0]}"#;
        assert!(serde_json::from_str::<EdgeMatrix>(diag).is_err());
        let huge = r#"{"n_nodes":18446744073709551615,"data":[]}"#;
        assert!(serde_json::from_str::<EdgeMatrix>(huge).is_err());
    }

    #[test]
    fn serde_json_round_trip() {
        let mut m = EdgeMatrix::complete(4);
        m.set(3, 1, EdgeStatus::new(-2)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: EdgeMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn lower_differences_reports_each_pair_once() {
        let a = EdgeMatrix::complete(4);
        let mut b = a.clone();
        b.remove_edge(0, 3).unwrap();
        b.set(2, 1, EdgeStatus::new(2)).unwrap();
        let diffs: Vec<_> = a.lower_differences(&b).collect();
        assert_eq!(
            diffs,
            vec![
                (2, 1, EdgeStatus::PRESENT, EdgeStatus::new(2)),
                (3, 0, EdgeStatus::PRESENT, EdgeStatus::ABSENT),
            ]
        );
    }
}
