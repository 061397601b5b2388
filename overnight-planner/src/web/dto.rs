//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{InvalidRating, Position, Rating, Stop};
use crate::planner::{PlanOutcome, TripConfig};

/// Trip parameters that a request may override.
#[derive(Debug, Default, Deserialize)]
pub struct TripOverrides {
    /// Number of travel days (defaults to the server configuration)
    pub num_segments: Option<usize>,

    /// Maximum length of one day's travel (defaults to the server configuration)
    pub max_segment_length: Option<u64>,
}

impl TripOverrides {
    /// Apply these overrides on top of `defaults`.
    pub fn apply(&self, defaults: &TripConfig) -> TripConfig {
        TripConfig {
            num_segments: self.num_segments.unwrap_or(defaults.num_segments),
            max_segment_length: self
                .max_segment_length
                .unwrap_or(defaults.max_segment_length),
        }
    }
}

/// A candidate stop in a plan request.
#[derive(Debug, Deserialize)]
pub struct StopInput {
    /// Distance from the start of the route
    pub position: u64,

    /// Quality rating, higher is better
    pub rating: f64,

    /// Optional display name (defaults to "Stop N")
    pub name: Option<String>,
}

/// Request to plan overnight stops.
#[derive(Debug, Deserialize)]
pub struct PlanItineraryRequest {
    /// Position of the destination
    pub total_length: u64,

    /// Candidate stops
    pub stops: Vec<StopInput>,

    /// Trip parameter overrides
    #[serde(flatten)]
    pub trip: TripOverrides,
}

impl PlanItineraryRequest {
    /// Convert the request's stops into domain stops.
    pub fn to_stops(&self) -> Result<Vec<Stop>, InvalidRating> {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, s)| -> Result<Stop, InvalidRating> {
                let name = s.name.clone().unwrap_or_else(|| format!("Stop {}", i + 1));
                Ok(Stop::new(name, Position::new(s.position), Rating::new(s.rating)?))
            })
            .collect()
    }

    /// Position of the destination.
    pub fn total_length(&self) -> Position {
        Position::new(self.total_length)
    }
}

/// A chosen stop in a plan response.
#[derive(Debug, Serialize, PartialEq)]
pub struct StopResult {
    /// Stop name
    pub name: String,

    /// Distance from the start of the route
    pub position: u64,

    /// Quality rating
    pub rating: f64,

    /// Travel from the previous stop (or the start) to this one
    pub gap: u64,
}

/// Response for a plan request.
#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    /// Whether an itinerary was found
    pub found: bool,

    /// Lowest rating among the chosen stops
    pub rating_floor: Option<f64>,

    /// Number of rating floors tried
    pub floors_tried: usize,

    /// Chosen stops in travel order (empty if none found)
    pub stops: Vec<StopResult>,

    /// Travel from the last stop to the destination
    pub remaining: Option<u64>,

    /// Position of the destination
    pub total_length: u64,
}

impl PlanItineraryResponse {
    /// Create from a planning outcome.
    pub fn from_outcome(outcome: &PlanOutcome, total_length: Position) -> Self {
        let Some(plan) = outcome.plan() else {
            return Self {
                found: false,
                rating_floor: None,
                floors_tried: outcome.floors_tried(),
                stops: Vec::new(),
                remaining: None,
                total_length: total_length.value(),
            };
        };

        let itinerary = &plan.itinerary;
        let stops = itinerary
            .stops()
            .iter()
            .zip(itinerary.gaps())
            .map(|(stop, gap)| StopResult {
                name: stop.name.clone(),
                position: stop.position.value(),
                rating: stop.rating.value(),
                gap,
            })
            .collect();

        Self {
            found: true,
            rating_floor: Some(plan.rating_floor.value()),
            floors_tried: plan.floors_tried,
            stops,
            remaining: Some(itinerary.remaining()),
            total_length: total_length.value(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
