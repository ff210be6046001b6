//! Domain error types.
//!
//! These errors represent invariant violations in the domain layer. They are
//! distinct from validation findings on input lines and from IO errors.

use super::SegmentKind;

/// Domain-level errors for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A travel segment was requested for a kind that does not travel
    #[error("{0} segments do not travel between two locations")]
    NotTravel(SegmentKind),

    /// Trip has no segments
    #[error("trip must have at least one segment")]
    EmptyTrip,
}
