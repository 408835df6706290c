//! Invariant checking shared by the matrix, history and tracker types.
//!
//! Checks are compiled in for debug builds and whenever the `strict-invariants`
//! or `check-invariants` feature is enabled.

use crate::recurrence_error::RecurrenceError;

/// `true` when invariant checks are compiled into this build.
pub const INVARIANTS_ENABLED: bool = cfg!(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
));

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), RecurrenceError>;

    /// Panic on the first violation when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        if INVARIANTS_ENABLED {
            if let Err(e) = self.validate_invariants() {
                panic!("[invariants] {}: {e}", std::any::type_name::<Self>());
            }
        }
    }
}

/// Run a fallible check and panic with context when invariant checking is
/// enabled. Compiles to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
