//! Route file loading.
//!
//! A route file is plain text:
//!
//! ```text
//! 5            <- number of hotels (informational)
//! 1680         <- total length of the route
//! 12 4.3       <- one hotel per line: position and rating
//! 326 4.8
//! ...
//! ```
//!
//! Hotels are named after the line they appear on, so the first hotel of a
//! file is "Hotel 3".

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{Position, Rating, Stop};

/// Errors that can occur when loading a route file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("failed to read route file: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended before the header was complete
    #[error("missing {0} line")]
    MissingHeader(&'static str),

    /// A header line could not be parsed
    #[error("line {line}: invalid {field}: {value:?}")]
    InvalidHeader {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A hotel line could not be parsed
    #[error("line {line}: {reason}")]
    InvalidStop { line: usize, reason: String },
}

/// Parsed contents of a route file.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteData {
    /// Position of the destination.
    pub total_length: Position,
    /// Candidate overnight stops in file order.
    pub stops: Vec<Stop>,
}

/// Load a route file from disk.
pub fn load_route(path: impl AsRef<Path>) -> Result<RouteData, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let route = parse_route(&contents)?;

    debug!(
        path = %path.display(),
        stops = route.stops.len(),
        total_length = route.total_length.value(),
        "Loaded route file"
    );

    Ok(route)
}

/// Parse the contents of a route file.
pub fn parse_route(contents: &str) -> Result<RouteData, LoadError> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_str) = lines.next().ok_or(LoadError::MissingHeader("hotel count"))?;
    let declared: usize = count_str.parse().map_err(|_| LoadError::InvalidHeader {
        line: count_line,
        field: "hotel count",
        value: count_str.to_string(),
    })?;

    let (total_line, total_str) = lines.next().ok_or(LoadError::MissingHeader("total length"))?;
    let total_length: u64 = total_str.parse().map_err(|_| LoadError::InvalidHeader {
        line: total_line,
        field: "total length",
        value: total_str.to_string(),
    })?;

    let mut stops = Vec::with_capacity(declared);
    let mut seen = HashSet::new();

    for (line, text) in lines {
        let stop = parse_stop(line, text)?;
        if !seen.insert(stop.position) {
            warn!(line, position = stop.position.value(), "Duplicate hotel position");
        }
        stops.push(stop);
    }

    if stops.len() != declared {
        warn!(
            declared,
            found = stops.len(),
            "Hotel count in header does not match the file"
        );
    }

    Ok(RouteData {
        total_length: Position::new(total_length),
        stops,
    })
}

/// Parse a single `<position> <rating>` line.
fn parse_stop(line: usize, text: &str) -> Result<Stop, LoadError> {
    let mut fields = text.split_whitespace();

    let (Some(position_str), Some(rating_str), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(LoadError::InvalidStop {
            line,
            reason: format!("expected \"<position> <rating>\", got {text:?}"),
        });
    };

    let position: u64 = position_str
        .parse()
        .map_err(|_| LoadError::InvalidStop {
            line,
            reason: format!("invalid position {position_str:?}"),
        })?;

    let value: f64 = rating_str
        .parse()
        .map_err(|_| LoadError::InvalidStop {
            line,
            reason: format!("invalid rating {rating_str:?}"),
        })?;

    let rating = Rating::new(value).map_err(|e| LoadError::InvalidStop {
        line,
        reason: e.to_string(),
    })?;

    Ok(Stop::new(format!("Hotel {line}"), Position::new(position), rating))
}
