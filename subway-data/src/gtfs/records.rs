//! Row types for the static tables.
//!
//! Each row type only names the columns the dataset uses.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A row type with the header columns it cannot do without.
pub trait GtfsTable: DeserializeOwned {
    const REQUIRED_COLUMNS: &'static [&'static str];
}

/// A row of `stops.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_name: String,
}

impl GtfsTable for StopRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["stop_id", "stop_name"];
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripRecord {
    pub trip_id: String,
    pub route_id: String,
}

impl GtfsTable for TripRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["trip_id", "route_id"];
}

/// A row of `stop_times.txt`.
///
/// `stop_id` is a platform ID carrying a direction suffix, e.g. `"101N"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub stop_id: String,
}

impl GtfsTable for StopTimeRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["trip_id", "stop_id"];
}

/// A row of `transfers.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRecord {
    pub from_stop_id: String,
    pub to_stop_id: String,
}

impl GtfsTable for TransferRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["from_stop_id", "to_stop_id"];
}
