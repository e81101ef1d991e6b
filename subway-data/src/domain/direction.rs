//! Travel direction encoded in platform stop IDs.

use std::fmt;

/// Direction of travel at a platform.
///
/// Platform stop IDs carry the direction as a one-letter suffix on the
/// parent station ID: `"101N"` is the northbound platform of `"101"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northbound,
    Southbound,
}

impl Direction {
    /// Read the direction marker from the end of a platform stop ID.
    ///
    /// Returns `None` for parent station IDs that carry no marker.
    pub fn from_stop_id(stop_id: &str) -> Option<Self> {
        if stop_id.ends_with('N') {
            Some(Direction::Northbound)
        } else if stop_id.ends_with('S') {
            Some(Direction::Southbound)
        } else {
            None
        }
    }

}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Northbound => f.write_str("northbound"),
            Direction::Southbound => f.write_str("southbound"),
        }
    }
}

/// Split a scheduled platform stop ID into its parent stop ID and direction.
///
/// An `S` suffix is southbound. Everything else counts as northbound, with
/// a trailing `N` removed when present.
///
/// ```
/// use subway_data::domain::{Direction, split_stop_id};
///
/// assert_eq!(split_stop_id("101S"), ("101", Direction::Southbound));
/// assert_eq!(split_stop_id("101N"), ("101", Direction::Northbound));
/// assert_eq!(split_stop_id("101"), ("101", Direction::Northbound));
/// ```
pub fn split_stop_id(stop_id: &str) -> (&str, Direction) {
    match stop_id.strip_suffix('S') {
        Some(parent) => (parent, Direction::Southbound),
        None => (
            stop_id.strip_suffix('N').unwrap_or(stop_id),
            Direction::Northbound,
        ),
    }
}
