//! Reachable stop filtering.

use crate::domain::{Position, Stop};

use super::thresholds::RatingFloor;

/// Stops that can be reached in one day from `position`.
///
/// A stop is reachable if it lies strictly ahead of `position` and no more
/// than `max_segment_length` beyond it. When `floor` is given, stops whose
/// rating it does not allow are dropped as well. Stops keep their input order.
pub fn reachable_stops<'s>(
    stops: &'s [Stop],
    position: Position,
    max_segment_length: u64,
    floor: Option<&RatingFloor<'_>>,
) -> Vec<&'s Stop> {
    let limit = position.reach(max_segment_length);

    stops
        .iter()
        .filter(|s| s.position > position && s.position <= limit)
        .filter(|s| floor.is_none_or(|f| f.allows(s.rating)))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Rating;
    use proptest::prelude::*;

    fn stops_strategy() -> impl Strategy<Value = Vec<Stop>> {
        prop::collection::vec((0u64..2000, 0u8..5), 0..40).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (pos, r))| {
                    Stop::new(
                        format!("S{i}"),
                        Position::new(pos),
                        Rating::new(f64::from(r)).unwrap(),
                    )
                })
                .collect()
        })
    }

    proptest! {
        /// Every returned stop lies in (position, position + max]
        /// and every stop in that window is returned
        #[test]
        fn window_is_exact(
            stops in stops_strategy(),
            from in 0u64..2000,
            max in 1u64..600,
        ) {
            let position = Position::new(from);
            let reachable = reachable_stops(&stops, position, max, None);

            for s in &reachable {
                prop_assert!(s.position > position);
                prop_assert!(s.position.value() <= from + max);
            }

            let expected = stops
                .iter()
                .filter(|s| s.position.value() > from && s.position.value() <= from + max)
                .count();
            prop_assert_eq!(reachable.len(), expected);
        }
    }
}
