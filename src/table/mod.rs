//! Dense scan-friendly layouts derived from the input diagram.

pub mod membership;

pub use membership::{MembershipTable, SENTINEL};
