//! Invariant checking hooks for the crate's output structures.
//!
//! Checks run automatically in debug builds and whenever the
//! `check-invariants` (or `strict-invariants`) feature is enabled; release
//! builds without those features pay nothing.

use crate::incidence_error::IncidenceError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), IncidenceError>;
}

/// Run a fallible check and panic on error when invariant checking is
/// enabled; compiles to nothing otherwise. The context names the structure
/// being checked.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("invariant violation in ", $($ctx)*, ": {}"), e);
        }
    };
}
