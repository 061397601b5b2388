//! Rating thresholds and rating floors.

use crate::domain::{Rating, Stop};

/// Distinct ratings present among `stops`, best first.
///
/// The result is the sequence of rating floors the planner tries. An empty
/// stop list yields no thresholds.
pub fn rating_thresholds(stops: &[Stop]) -> Vec<Rating> {
    let mut ratings: Vec<Rating> = stops.iter().map(|s| s.rating).collect();
    ratings.sort_unstable_by(|a, b| b.cmp(a));
    ratings.dedup();
    ratings
}

/// The set of ratings acceptable in one planning attempt.
///
/// A floor is always a prefix of the thresholds returned by
/// [`rating_thresholds`]: the best `n` distinct ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingFloor<'a> {
    allowed: &'a [Rating],
}

impl<'a> RatingFloor<'a> {
    /// The floor made of the best `count` thresholds.
    ///
    /// Returns `None` if `count` is zero or exceeds the number of thresholds.
    pub fn top(thresholds: &'a [Rating], count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        thresholds.get(..count).map(|allowed| Self { allowed })
    }

    /// Whether a stop with this rating may be used.
    pub fn allows(&self, rating: Rating) -> bool {
        self.allowed.contains(&rating)
    }

    /// Lowest rating accepted by this floor.
    pub fn minimum(&self) -> Rating {
        // A floor is never empty, see `top`.
        self.allowed[self.allowed.len() - 1]
    }
}
