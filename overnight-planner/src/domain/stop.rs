//! Candidate overnight stops.

use std::fmt;

use super::{Position, Rating};

/// A candidate overnight location on the route.
///
/// Stops are immutable once loaded. The planner only looks at `position`
/// and `rating`; the name is carried along for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Display name (e.g. "Hotel 7")
    pub name: String,
    /// Distance from the start of the route
    pub position: Position,
    /// Quality rating, higher is better
    pub rating: Rating,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(name: impl Into<String>, position: Position, rating: Rating) -> Self {
        Self {
            name: name.into(),
            position,
            rating,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (position {}, rating {})",
            self.name, self.position, self.rating
        )
    }
}
