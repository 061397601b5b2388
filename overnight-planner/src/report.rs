//! Console presentation of planning results.

use std::fmt;

use crate::domain::Position;
use crate::planner::PlanOutcome;

/// Text report of a planning outcome.
///
/// For a found plan, lists each overnight stop with the day's travel that
/// leads to it, followed by what is left to the destination.
pub struct ItineraryReport<'a> {
    outcome: &'a PlanOutcome,
    total_length: Position,
}

impl<'a> ItineraryReport<'a> {
    /// Create a report for `outcome` on a route of `total_length`.
    pub fn new(outcome: &'a PlanOutcome, total_length: Position) -> Self {
        Self {
            outcome,
            total_length,
        }
    }
}

impl fmt::Display for ItineraryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.plan() {
            Some(plan) => {
                let itinerary = &plan.itinerary;
                let days = itinerary.stops().iter().zip(itinerary.gaps());
                for (night, (stop, gap)) in days.enumerate() {
                    writeln!(f, "Day {}: travel {}", night + 1, gap)?;
                    writeln!(
                        f,
                        "  {} at {} (rating {})",
                        stop.name, stop.position, stop.rating
                    )?;
                }
                writeln!(
                    f,
                    "Day {}: travel {} to the destination",
                    itinerary.len() + 1,
                    itinerary.remaining()
                )?;
                writeln!(f, "Lowest rating: {}", plan.rating_floor)?;
            }
            None => writeln!(f, "No solution")?,
        }
        write!(f, "Total length: {}", self.total_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rating, Stop};
    use crate::planner::{Planner, TripConfig};

    fn stop(position: u64, rating: f64) -> Stop {
        Stop::new(
            format!("Hotel {position}"),
            Position::new(position),
            Rating::new(rating).unwrap(),
        )
    }

    #[test]
    fn report_found_plan() {
        let stops = vec![stop(100, 5.0), stop(200, 3.0), stop(400, 4.0)];
        let config = TripConfig::new(2, 300);
        let outcome = Planner::new(&config)
            .solve(&stops, Position::new(500))
            .unwrap();

        let report = ItineraryReport::new(&outcome, Position::new(500)).to_string();

        assert_eq!(
            report,
            "Day 1: travel 400\n  \
             Hotel 400 at 400 (rating 4)\n\
             Day 2: travel 100 to the destination\n\
             Lowest rating: 4\n\
             Total length: 500"
        );
    }

    #[test]
    fn report_multiple_stops() {
        let stops = vec![stop(300, 4.0), stop(550, 4.5)];
        let config = TripConfig::new(3, 300);
        let outcome = Planner::new(&config)
            .solve(&stops, Position::new(800))
            .unwrap();

        let report = ItineraryReport::new(&outcome, Position::new(800)).to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Day 1: travel 300");
        assert_eq!(lines[2], "Day 2: travel 250");
        assert_eq!(lines[3], "  Hotel 550 at 550 (rating 4.5)");
        assert_eq!(lines[4], "Day 3: travel 250 to the destination");
    }

    #[test]
    fn report_no_solution() {
        let outcome = PlanOutcome::NoFeasibleItinerary { floors_tried: 2 };

        let report = ItineraryReport::new(&outcome, Position::new(500)).to_string();

        assert_eq!(report, "No solution\nTotal length: 500");
    }
}
