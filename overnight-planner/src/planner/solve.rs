//! Best-first rating floor search.
//!
//! Tries rating floors from the best rating downwards and returns the first
//! itinerary the greedy builder can complete.

use tracing::{debug, warn};

use crate::domain::{DomainError, Itinerary, Position, Rating, RouteSpec, Stop};

use super::builder::{BuildOutcome, ItineraryBuilder};
use super::config::TripConfig;
use super::thresholds::{RatingFloor, rating_thresholds};

/// Error from planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Trip parameters the planner cannot work with
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),
}

impl From<DomainError> for PlanError {
    fn from(e: DomainError) -> Self {
        PlanError::InvalidRequest(e.to_string())
    }
}

/// A successful plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// The chosen overnight stops.
    pub itinerary: Itinerary,

    /// Lowest rating the search had to accept.
    pub rating_floor: Rating,

    /// Number of rating floors tried, including the successful one.
    pub floors_tried: usize,
}

/// Result of planning.
///
/// Not finding an itinerary is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Found(Plan),
    NoFeasibleItinerary { floors_tried: usize },
}

impl PlanOutcome {
    /// Returns the plan if one was found.
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            PlanOutcome::Found(plan) => Some(plan),
            PlanOutcome::NoFeasibleItinerary { .. } => None,
        }
    }

    /// Returns the itinerary if one was found.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.plan().map(|p| &p.itinerary)
    }

    /// Number of rating floors tried.
    pub fn floors_tried(&self) -> usize {
        match self {
            PlanOutcome::Found(plan) => plan.floors_tried,
            PlanOutcome::NoFeasibleItinerary { floors_tried } => *floors_tried,
        }
    }

    /// Returns true if an itinerary was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }
}

/// Overnight stop planner.
pub struct Planner<'a> {
    config: &'a TripConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a TripConfig) -> Self {
        Self { config }
    }

    /// Plan overnight stops for a route of `total_length`.
    ///
    /// Rating floors are relaxed one distinct rating at a time, best first,
    /// and the first floor under which the greedy builder reaches the
    /// destination wins.
    pub fn solve(&self, stops: &[Stop], total_length: Position) -> Result<PlanOutcome, PlanError> {
        let route = RouteSpec::new(
            total_length,
            self.config.num_segments,
            self.config.max_segment_length,
        )?;

        let thresholds = rating_thresholds(stops);
        debug!(
            stops = stops.len(),
            thresholds = thresholds.len(),
            total_length = total_length.value(),
            "Planning overnight stops"
        );

        for count in 1..=thresholds.len() {
            let Some(floor) = RatingFloor::top(&thresholds, count) else {
                break;
            };

            match ItineraryBuilder::new(stops, &route, floor).run() {
                BuildOutcome::Success(itinerary) => {
                    debug!(
                        floor = %floor.minimum(),
                        stops = itinerary.len(),
                        "Found itinerary"
                    );
                    return Ok(PlanOutcome::Found(Plan {
                        itinerary,
                        rating_floor: floor.minimum(),
                        floors_tried: count,
                    }));
                }
                BuildOutcome::DeadEnd(reason) => {
                    debug!(floor = %floor.minimum(), ?reason, "Rating floor dead-ended");
                }
                BuildOutcome::Rejected(err) => {
                    warn!(floor = %floor.minimum(), error = %err, "Built an invalid itinerary");
                }
            }
        }

        Ok(PlanOutcome::NoFeasibleItinerary {
            floors_tried: thresholds.len(),
        })
    }
}
