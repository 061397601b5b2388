//! Greedy itinerary construction for a single rating floor.
//!
//! The builder starts at the beginning of the route and repeatedly jumps to
//! the farthest stop it can reach in one day whose rating the floor allows.
//! Choices are never revisited within an attempt.

use tracing::trace;

use crate::domain::{DomainError, Itinerary, Position, RouteSpec, Stop};

use super::reachable::reachable_stops;
use super::thresholds::RatingFloor;

/// State of an itinerary under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// More stops are needed and the attempt is still alive.
    Building,
    /// The attempt cannot reach the destination under this floor.
    DeadEnd(DeadEndReason),
    /// The destination is within one day of the last stop.
    Success,
}

impl BuildState {
    /// Returns true for `DeadEnd` and `Success`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BuildState::Building)
    }
}

/// Why an attempt was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadEndReason {
    /// No stop allowed by the floor is within one day of `position`.
    NoReachableStop { position: Position },
    /// Every night has been used and the destination is still too far.
    OutOfNights { position: Position },
}

/// Final result of running a builder.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Success(Itinerary),
    DeadEnd(DeadEndReason),
    /// The chosen stops did not form a valid itinerary. Every step respects
    /// the route's limits, so this indicates a bug in the builder.
    Rejected(DomainError),
}

/// Builds one candidate itinerary for a fixed rating floor.
#[derive(Debug)]
pub struct ItineraryBuilder<'a> {
    stops: &'a [Stop],
    route: &'a RouteSpec,
    floor: RatingFloor<'a>,
    position: Position,
    chosen: Vec<&'a Stop>,
    state: BuildState,
}

impl<'a> ItineraryBuilder<'a> {
    /// Create a builder at the start of the route with no stops chosen.
    pub fn new(stops: &'a [Stop], route: &'a RouteSpec, floor: RatingFloor<'a>) -> Self {
        Self {
            stops,
            route,
            floor,
            position: Position::START,
            // The night budget comes from the caller and may be huge; the
            // stop list bounds what can actually be chosen.
            chosen: Vec::with_capacity(route.stops_needed().min(stops.len())),
            state: BuildState::Building,
        }
    }

    /// Current state.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Position of the last chosen stop, or the start of the route.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Stops chosen so far.
    pub fn chosen(&self) -> &[&'a Stop] {
        &self.chosen
    }

    /// Choose the next stop and return the new state.
    ///
    /// Once the builder is in a terminal state, further steps leave it there.
    pub fn step(&mut self) -> BuildState {
        if self.state.is_terminal() {
            return self.state;
        }

        let candidates = reachable_stops(
            self.stops,
            self.position,
            self.route.max_segment_length(),
            Some(&self.floor),
        );

        // Farthest progress wins, regardless of which allowed rating it has.
        let Some(next) = candidates.into_iter().max_by_key(|s| s.position) else {
            self.state = BuildState::DeadEnd(DeadEndReason::NoReachableStop {
                position: self.position,
            });
            return self.state;
        };

        trace!(
            stop = %next.name,
            position = next.position.value(),
            rating = next.rating.value(),
            "Chose overnight stop"
        );

        self.chosen.push(next);
        self.position = next.position;

        self.state = if self.route.finishes_from(self.position) {
            BuildState::Success
        } else if self.chosen.len() >= self.route.stops_needed() {
            BuildState::DeadEnd(DeadEndReason::OutOfNights {
                position: self.position,
            })
        } else {
            BuildState::Building
        };

        self.state
    }

    /// Step until the attempt succeeds or dead-ends.
    pub fn run(mut self) -> BuildOutcome {
        loop {
            match self.step() {
                BuildState::Building => continue,
                BuildState::DeadEnd(reason) => return BuildOutcome::DeadEnd(reason),
                BuildState::Success => break,
            }
        }

        let stops = self.chosen.into_iter().cloned().collect();
        match Itinerary::new(stops, self.route) {
            Ok(itinerary) => BuildOutcome::Success(itinerary),
            Err(err) => BuildOutcome::Rejected(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;
    use crate::planner::rating_thresholds;

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

    fn positions(itinerary: &Itinerary) -> Vec<u64> {
        itinerary.stops().iter().map(|s| s.position.value()).collect()
    }

    #[test]
    fn starts_building_at_origin() {
        let stops = vec![stop(100, 5.0)];
        let route = route(500, 2, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 1).unwrap();

        let builder = ItineraryBuilder::new(&stops, &route, floor);
        assert_eq!(builder.state(), BuildState::Building);
        assert_eq!(builder.position(), Position::START);
        assert!(builder.chosen().is_empty());
    }

    #[test]
    fn out_of_nights_under_strict_floor() {
        // Only the 5-star stop is allowed; it leaves 400 to go with 300 per day.
        let stops = vec![stop(100, 5.0), stop(200, 3.0), stop(400, 4.0)];
        let route = route(500, 2, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 1).unwrap();

        let mut builder = ItineraryBuilder::new(&stops, &route, floor);
        let state = builder.step();

        assert_eq!(
            state,
            BuildState::DeadEnd(DeadEndReason::OutOfNights {
                position: Position::new(100)
            })
        );
        assert_eq!(builder.chosen().len(), 1);
    }

    #[test]
    fn picks_farthest_not_best() {
        let stops = vec![stop(100, 5.0), stop(200, 3.0), stop(400, 4.0)];
        let route = route(500, 2, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 2).unwrap();

        let BuildOutcome::Success(itinerary) = ItineraryBuilder::new(&stops, &route, floor).run()
        else {
            panic!("expected success");
        };
        assert_eq!(positions(&itinerary), vec![400]);
    }

    #[test]
    fn no_reachable_stop() {
        let stops = vec![stop(1000, 5.0)];
        let route = route(500, 2, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 1).unwrap();

        let outcome = ItineraryBuilder::new(&stops, &route, floor).run();
        assert_eq!(
            outcome,
            BuildOutcome::DeadEnd(DeadEndReason::NoReachableStop {
                position: Position::START
            })
        );
    }

    #[test]
    fn success_with_fewer_stops_than_nights() {
        let stops = vec![stop(200, 4.0), stop(300, 4.0)];
        let route = route(600, 5, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 1).unwrap();

        let mut builder = ItineraryBuilder::new(&stops, &route, floor);
        assert_eq!(builder.step(), BuildState::Success);

        let BuildOutcome::Success(itinerary) = builder.run() else {
            panic!("expected success");
        };
        assert_eq!(positions(&itinerary), vec![300]);
    }

    #[test]
    fn multi_day_route() {
        let stops = vec![
            stop(150, 3.0),
            stop(300, 3.0),
            stop(450, 3.0),
            stop(600, 3.0),
            stop(700, 3.0),
        ];
        let route = route(1000, 4, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 1).unwrap();

        let mut builder = ItineraryBuilder::new(&stops, &route, floor);
        assert_eq!(builder.step(), BuildState::Building);
        assert_eq!(builder.position(), Position::new(300));
        assert_eq!(builder.step(), BuildState::Building);
        assert_eq!(builder.position(), Position::new(600));
        assert_eq!(builder.step(), BuildState::Success);
        assert_eq!(builder.position(), Position::new(700));
        assert_eq!(builder.chosen().len(), 3);
    }

    #[test]
    fn destination_within_reach_still_needs_a_stop() {
        let stops: Vec<Stop> = vec![];
        let ratings = vec![Rating::new(1.0).unwrap()];
        let route = route(100, 2, 300);
        let floor = RatingFloor::top(&ratings, 1).unwrap();

        let outcome = ItineraryBuilder::new(&stops, &route, floor).run();
        assert!(matches!(outcome, BuildOutcome::DeadEnd(_)));
    }

    #[test]
    fn terminal_state_is_sticky() {
        let stops = vec![stop(1000, 5.0)];
        let route = route(500, 2, 300);
        let thresholds = rating_thresholds(&stops);
        let floor = RatingFloor::top(&thresholds, 1).unwrap();

        let mut builder = ItineraryBuilder::new(&stops, &route, floor);
        let first = builder.step();
        assert!(first.is_terminal());
        assert_eq!(builder.step(), first);
        assert_eq!(builder.step(), first);
    }
}
