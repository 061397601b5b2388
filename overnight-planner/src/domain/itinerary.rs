//! Itinerary type.
//!
//! An `Itinerary` is the ordered list of overnight stops for a trip, checked
//! against the route it was planned for.

use super::{DomainError, Position, Rating, RouteSpec, Stop};

/// An ordered sequence of overnight stops that covers a route.
///
/// # Invariants
///
/// - At least one stop, and no more than the route's `stops_needed()`
/// - Stop positions strictly increase
/// - No gap (start to first stop, stop to stop, last stop to destination)
///   is longer than the route's maximum segment length
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    stops: Vec<Stop>,
    total_length: Position,
    lowest_rating: Rating,
}

impl Itinerary {
    /// Constructs an itinerary, checking it against `route`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any invariant listed on the type does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use overnight_planner::domain::{Itinerary, Position, Rating, RouteSpec, Stop};
    ///
    /// let route = RouteSpec::new(Position::new(500), 2, 300).unwrap();
    /// let stop = Stop::new("Hotel 5", Position::new(400), Rating::new(4.0).unwrap());
    ///
    /// let itinerary = Itinerary::new(vec![stop], &route).unwrap();
    /// assert_eq!(itinerary.gaps(), vec![400]);
    /// assert_eq!(itinerary.remaining(), 100);
    /// ```
    pub fn new(stops: Vec<Stop>, route: &RouteSpec) -> Result<Self, DomainError> {
        let Some(lowest_rating) = stops.iter().map(|s| s.rating).min() else {
            return Err(DomainError::EmptyItinerary);
        };

        if stops.len() > route.stops_needed() {
            return Err(DomainError::TooManyStops {
                stops: stops.len(),
                allowed: route.stops_needed(),
            });
        }

        let max = route.max_segment_length();
        let mut previous = Position::START;
        for (i, stop) in stops.iter().enumerate() {
            if i > 0 && stop.position <= previous {
                return Err(DomainError::NotAscending {
                    previous,
                    next: stop.position,
                });
            }
            if stop.position.distance_from(previous) > max {
                return Err(DomainError::SegmentTooLong {
                    from: previous,
                    to: stop.position,
                    max,
                });
            }
            previous = stop.position;
        }

        if !route.finishes_from(previous) {
            return Err(DomainError::SegmentTooLong {
                from: previous,
                to: route.total_length(),
                max,
            });
        }

        Ok(Self {
            stops,
            total_length: route.total_length(),
            lowest_rating,
        })
    }

    /// Returns the stops in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the number of overnight stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: itineraries have at least one stop.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Position of the destination.
    pub fn total_length(&self) -> Position {
        self.total_length
    }

    /// Position of the final overnight stop.
    pub fn last_position(&self) -> Position {
        self.stops
            .last()
            .map_or(Position::START, |stop| stop.position)
    }

    /// Distance travelled to reach each stop: from the start for the first
    /// stop, from the previous stop afterwards.
    pub fn gaps(&self) -> Vec<u64> {
        let mut previous = Position::START;
        self.stops
            .iter()
            .map(|stop| {
                let gap = stop.position.distance_from(previous);
                previous = stop.position;
                gap
            })
            .collect()
    }

    /// Distance left from the final stop to the destination.
    pub fn remaining(&self) -> u64 {
        self.total_length.distance_from(self.last_position())
    }

    /// Worst rating among the chosen stops.
    pub fn lowest_rating(&self) -> Rating {
        self.lowest_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(position: u64, rating: f64) -> Stop {
        Stop::new(
            format!("Hotel @{position}"),
            Position::new(position),
            Rating::new(rating).unwrap(),
        )
    }

    fn route(total: u64, segments: usize, max: u64) -> RouteSpec {
        RouteSpec::new(Position::new(total), segments, max).unwrap()
    }

    #[test]
    fn valid_itinerary() {
        let itinerary = Itinerary::new(
            vec![stop(300, 4.0), stop(600, 3.5), stop(900, 5.0)],
            &route(1200, 4, 300),
        )
        .unwrap();

        assert_eq!(itinerary.len(), 3);
        assert!(!itinerary.is_empty());
        assert_eq!(itinerary.gaps(), vec![300, 300, 300]);
        assert_eq!(itinerary.remaining(), 300);
        assert_eq!(itinerary.last_position(), Position::new(900));
        assert_eq!(itinerary.total_length(), Position::new(1200));
        assert_eq!(itinerary.lowest_rating(), Rating::new(3.5).unwrap());
    }

    #[test]
    fn fewer_stops_than_nights_is_allowed() {
        let itinerary = Itinerary::new(vec![stop(250, 1.0)], &route(500, 5, 300)).unwrap();
        assert_eq!(itinerary.len(), 1);
    }

    #[test]
    fn reject_empty() {
        let err = Itinerary::new(vec![], &route(500, 2, 300)).unwrap_err();
        assert_eq!(err, DomainError::EmptyItinerary);
    }

    #[test]
    fn reject_too_many_stops() {
        let err = Itinerary::new(vec![stop(100, 1.0), stop(200, 1.0)], &route(300, 2, 300))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::TooManyStops {
                stops: 2,
                allowed: 1
            }
        );
    }

    #[test]
    fn reject_descending_stops() {
        let err = Itinerary::new(vec![stop(200, 1.0), stop(100, 1.0)], &route(300, 3, 300))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotAscending { .. }));
    }

    #[test]
    fn reject_duplicate_positions() {
        let err = Itinerary::new(vec![stop(200, 1.0), stop(200, 2.0)], &route(300, 3, 300))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotAscending { .. }));
    }

    #[test]
    fn reject_long_first_segment() {
        let err = Itinerary::new(vec![stop(301, 1.0)], &route(400, 2, 300)).unwrap_err();
        assert_eq!(
            err,
            DomainError::SegmentTooLong {
                from: Position::START,
                to: Position::new(301),
                max: 300
            }
        );
    }

    #[test]
    fn reject_long_internal_segment() {
        let err = Itinerary::new(vec![stop(100, 1.0), stop(450, 1.0)], &route(500, 3, 300))
            .unwrap_err();
        assert!(matches!(err, DomainError::SegmentTooLong { .. }));
    }

    #[test]
    fn reject_long_final_segment() {
        let err = Itinerary::new(vec![stop(100, 1.0)], &route(500, 2, 300)).unwrap_err();
        assert_eq!(
            err,
            DomainError::SegmentTooLong {
                from: Position::new(100),
                to: Position::new(500),
                max: 300
            }
        );
    }
}
