//! Web layer for the overnight stop planner.
//!
//! Provides HTTP endpoints for planning itineraries from JSON or from the
//! route file format.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
