//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from file loading and web errors.

use super::Position;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trip parameters that the planner cannot work with
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// Itinerary has no stops
    #[error("itinerary must have at least one stop")]
    EmptyItinerary,

    /// Itinerary uses more stops than the trip has nights
    #[error("itinerary has {stops} stops but the trip allows at most {allowed}")]
    TooManyStops { stops: usize, allowed: usize },

    /// Stops are not in strictly increasing position order
    #[error("stop at {next} does not come after stop at {previous}")]
    NotAscending { previous: Position, next: Position },

    /// A single day's travel exceeds the maximum segment length
    #[error("segment from {from} to {to} is longer than {max}")]
    SegmentTooLong {
        from: Position,
        to: Position,
        max: u64,
    },
}
