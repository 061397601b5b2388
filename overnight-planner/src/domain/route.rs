//! Route and trip parameters.

use super::{DomainError, Position};

/// The route being planned together with the trip's shape.
///
/// A trip of `num_segments` days needs `num_segments - 1` overnight stops,
/// and no day may cover more than `max_segment_length`.
///
/// # Invariants
///
/// - `num_segments >= 2` (a trip without a night needs no planning)
/// - `max_segment_length > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    total_length: Position,
    num_segments: usize,
    max_segment_length: u64,
}

impl RouteSpec {
    /// Creates a validated route specification.
    ///
    /// # Examples
    ///
    /// ```
    /// use overnight_planner::domain::{Position, RouteSpec};
    ///
    /// let route = RouteSpec::new(Position::new(1680), 5, 360).unwrap();
    /// assert_eq!(route.stops_needed(), 4);
    ///
    /// assert!(RouteSpec::new(Position::new(1680), 1, 360).is_err());
    /// assert!(RouteSpec::new(Position::new(1680), 5, 0).is_err());
    /// ```
    pub fn new(
        total_length: Position,
        num_segments: usize,
        max_segment_length: u64,
    ) -> Result<Self, DomainError> {
        if num_segments < 2 {
            return Err(DomainError::InvalidRoute(
                "at least two segments are required",
            ));
        }
        if max_segment_length == 0 {
            return Err(DomainError::InvalidRoute(
                "maximum segment length must be positive",
            ));
        }
        Ok(Self {
            total_length,
            num_segments,
            max_segment_length,
        })
    }

    /// Position of the destination.
    pub fn total_length(&self) -> Position {
        self.total_length
    }

    /// Number of travel days.
    pub fn num_segments(&self) -> usize {
        self.num_segments
    }

    /// Longest distance that may be covered in one day.
    pub fn max_segment_length(&self) -> u64 {
        self.max_segment_length
    }

    /// Maximum number of overnight stops.
    pub fn stops_needed(&self) -> usize {
        self.num_segments - 1
    }

    /// Whether the destination can be reached in one day from `position`.
    pub fn finishes_from(&self, position: Position) -> bool {
        position.reach(self.max_segment_length) >= self.total_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_route() {
        let route = RouteSpec::new(Position::new(500), 2, 300).unwrap();
        assert_eq!(route.total_length(), Position::new(500));
        assert_eq!(route.num_segments(), 2);
        assert_eq!(route.max_segment_length(), 300);
        assert_eq!(route.stops_needed(), 1);
    }

    #[test]
    fn rejects_single_segment() {
        let err = RouteSpec::new(Position::new(500), 1, 300).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRoute("at least two segments are required")
        );
        assert!(RouteSpec::new(Position::new(500), 0, 300).is_err());
    }

    #[test]
    fn rejects_zero_segment_length() {
        assert!(RouteSpec::new(Position::new(500), 3, 0).is_err());
    }

    #[test]
    fn finishes_from_is_inclusive() {
        let route = RouteSpec::new(Position::new(500), 2, 300).unwrap();
        assert!(route.finishes_from(Position::new(200)));
        assert!(route.finishes_from(Position::new(400)));
        assert!(!route.finishes_from(Position::new(199)));
    }
}
