//! Trip configuration for the planner.

/// Configuration parameters for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripConfig {
    /// Number of travel days. A trip of `n` days needs `n - 1` overnight stops.
    pub num_segments: usize,

    /// Maximum distance (or driving time) covered in a single day.
    pub max_segment_length: u64,
}

impl TripConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(num_segments: usize, max_segment_length: u64) -> Self {
        Self {
            num_segments,
            max_segment_length,
        }
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            num_segments: 5,
            max_segment_length: 360, // 6 hours of driving
        }
    }
}
