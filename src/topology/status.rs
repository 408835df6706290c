//! `EdgeStatus`: a zero-cost handle for the status code of one edge
//!
//! The refinement step owns the meaning of status codes (absent, present,
//! oriented, ...). Cycle detection only ever copies and compares them, so the
//! type wraps a plain `i32` and exposes the code unchanged.
//!
//! Two codes are fixed by how the initial graph is built: `0` for an absent
//! edge and `1` for a present, not yet oriented one. Every other value is
//! passed through untouched.

use std::fmt;

/// Status code of an edge between two nodes.
///
/// # Memory layout
/// `repr(transparent)` over `i32`, so a flattened matrix of statuses has the
/// same layout as a `[i32]`.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct EdgeStatus(i32);

impl EdgeStatus {
    /// No edge between the two nodes. Also the only valid diagonal value.
    pub const ABSENT: EdgeStatus = EdgeStatus(0);
    /// Edge present and not oriented.
    pub const PRESENT: EdgeStatus = EdgeStatus(1);

    /// Wraps a raw status code.
    #[inline]
    pub const fn new(code: i32) -> Self {
        EdgeStatus(code)
    }

    /// Returns the raw status code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_absent(self) -> bool {
        self.0 == Self::ABSENT.0
    }
}

impl From<i32> for EdgeStatus {
    #[inline]
    fn from(code: i32) -> Self {
        EdgeStatus(code)
    }
}

impl From<EdgeStatus> for i32 {
    #[inline]
    fn from(status: EdgeStatus) -> Self {
        status.0
    }
}

impl fmt::Debug for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeStatus").field(&self.0).finish()
    }
}

impl fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_absent() {
        assert_eq!(EdgeStatus::default(), EdgeStatus::ABSENT);
        assert!(EdgeStatus::default().is_absent());
        assert!(!EdgeStatus::PRESENT.is_absent());
    }

    #[test]
    fn codes_pass_through() {
        for code in [-2, -1, 0, 1, 2, 6] {
            let s = EdgeStatus::from(code);
            assert_eq!(s.code(), code);
            assert_eq!(i32::from(s), code);
        }
    }

    #[test]
    fn display_and_debug() {
        let s = EdgeStatus::new(2);
        assert_eq!(format!("{s}"), "2");
        assert_eq!(format!("{s:?}"), "EdgeStatus(2)");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&EdgeStatus::new(-2)).unwrap();
        assert_eq!(json, "-2");
        let back: EdgeStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EdgeStatus::new(-2));
    }
}
