//! Route position type.

use std::fmt;

/// A point on the route, measured from the start.
///
/// Positions are plain integer distances (or driving times) along a single
/// axis. The unit is whatever the route file uses; the planner only ever
/// compares and subtracts positions.
///
/// # Examples
///
/// ```
/// use overnight_planner::domain::Position;
///
/// let stop = Position::new(340);
/// assert_eq!(stop.reach(360), Position::new(700));
/// assert_eq!(Position::new(700).distance_from(stop), 360);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(u64);

impl Position {
    /// The start of the route.
    pub const START: Position = Position(0);

    /// Create a position from a raw distance.
    pub fn new(value: u64) -> Self {
        Position(value)
    }

    /// Returns the raw distance from the start of the route.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Farthest position reachable from here within one segment.
    pub fn reach(&self, max_segment_length: u64) -> Position {
        Position(self.0.saturating_add(max_segment_length))
    }

    /// Distance travelled from `earlier` to `self`.
    ///
    /// Saturates at zero if `earlier` is actually ahead of `self`.
    pub fn distance_from(&self, earlier: Position) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
