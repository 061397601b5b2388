//! Overnight stop planner.
//!
//! This module implements the core planning algorithm that answers:
//! "Where should I stay each night so that every hotel is as good as
//! possible and no day's drive is too long?"
//!
//! The algorithm tries rating floors from best to worst. For each floor a
//! greedy builder jumps to the farthest acceptable stop within one day until
//! the destination is in reach or it runs out of stops or nights.

mod builder;
mod config;
mod reachable;
mod solve;
mod thresholds;


pub use builder::{BuildOutcome, BuildState, DeadEndReason, ItineraryBuilder};
pub use config::TripConfig;
pub use reachable::reachable_stops;
pub use solve::{Plan, PlanError, PlanOutcome, Planner};
pub use thresholds::{RatingFloor, rating_thresholds};
