//! Askama templates for the web frontend.

use askama::Template;

use crate::planner::{PlanOutcome, TripConfig};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub num_segments: usize,
    pub max_segment_length: u64,
}

impl IndexTemplate {
    /// Create the page with the server's default trip parameters filled in.
    pub fn new(config: &TripConfig) -> Self {
        Self {
            num_segments: config.num_segments,
            max_segment_length: config.max_segment_length,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Plan results fragment.
#[derive(Template)]
#[template(path = "plan_results.html")]
pub struct PlanResultsTemplate {
    pub plan: PlanView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Plan view model for templates.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub found: bool,
    pub rating_floor: String,
    pub floors_tried: usize,
    pub stops: Vec<StopView>,
    pub remaining: u64,
    pub total_length: u64,
}

/// A chosen stop for display.
#[derive(Debug, Clone)]
pub struct StopView {
    pub day: usize,
    pub name: String,
    pub position: u64,
    pub rating: String,
    pub gap: u64,
}

impl PlanView {
    /// Create from a planning outcome.
    pub fn from_outcome(outcome: &PlanOutcome, total_length: u64) -> Self {
        let Some(plan) = outcome.plan() else {
            return Self {
                found: false,
                rating_floor: String::new(),
                floors_tried: outcome.floors_tried(),
                stops: Vec::new(),
                remaining: 0,
                total_length,
            };
        };

        let itinerary = &plan.itinerary;
        let stops = itinerary
            .stops()
            .iter()
            .zip(itinerary.gaps())
            .enumerate()
            .map(|(i, (stop, gap))| StopView {
                day: i + 1,
                name: stop.name.clone(),
                position: stop.position.value(),
                rating: stop.rating.to_string(),
                gap,
            })
            .collect();

        Self {
            found: true,
            rating_floor: plan.rating_floor.to_string(),
            floors_tried: plan.floors_tried,
            stops,
            remaining: itinerary.remaining(),
            total_length,
        }
    }

    /// Day on which the destination is reached.
    pub fn final_day(&self) -> usize {
        self.stops.len() + 1
    }
}
