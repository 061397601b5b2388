//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TripConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Trip parameters used when a request does not override them
    pub config: Arc<TripConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: TripConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
