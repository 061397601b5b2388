//! Stop rating type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when constructing a rating from a non-finite value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rating: {reason}")]
pub struct InvalidRating {
    reason: &'static str,
}

/// A stop's quality rating. Higher is better.
///
/// Ratings are finite floating point numbers. Because NaN and infinities are
/// rejected at construction, ratings have a total order and can be compared,
/// hashed and deduplicated like integers.
///
/// # Examples
///
/// ```
/// use overnight_planner::domain::Rating;
///
/// let good = Rating::new(4.8).unwrap();
/// let poor = Rating::new(2.1).unwrap();
/// assert!(good > poor);
///
/// assert!(Rating::new(f64::NAN).is_err());
/// assert!(Rating::new(f64::INFINITY).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Rating(f64);

impl Rating {
    /// Create a rating, rejecting NaN and infinite values.
    pub fn new(value: f64) -> Result<Self, InvalidRating> {
        if value.is_nan() {
            return Err(InvalidRating {
                reason: "must be a number",
            });
        }
        if value.is_infinite() {
            return Err(InvalidRating {
                reason: "must be finite",
            });
        }
        // Normalise -0.0 so that equality and hashing agree.
        Ok(Rating(if value == 0.0 { 0.0 } else { value }))
    }

    /// Returns the raw rating value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Rating {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Debug for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rating({})", self.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = InvalidRating;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}
