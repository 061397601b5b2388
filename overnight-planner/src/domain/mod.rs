//! Domain types for the overnight stop planner.
//!
//! This module contains the core domain model types: positions along the
//! route, stop ratings, candidate stops, the route being planned and the
//! resulting itinerary. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod itinerary;
mod position;
mod rating;
mod route;
mod stop;

pub use error::DomainError;
pub use itinerary::Itinerary;
pub use position::Position;
pub use rating::{InvalidRating, Rating};
pub use route::RouteSpec;
pub use stop::Stop;
