//! Join canonical stop sequences with per-stop names.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Route, RouteTable, Stop};
use crate::gtfs::StopRecord;

use super::error::DatasetError;

/// Derive a `Stop` for every row of the stop table, keeping table order.
pub fn stops_from_records(records: &[StopRecord]) -> Vec<Stop> {
    records
        .iter()
        .map(|row| Stop::from_agency_name(&row.stop_id, &row.stop_name))
        .collect()
}

/// Index stops by ID. A later row for the same ID replaces an earlier one.
pub fn index_stops(stops: &[Stop]) -> HashMap<&str, &Stop> {
    stops.iter().map(|stop| (stop.id.as_str(), stop)).collect()
}

/// Build one `Route` per canonical sequence.
///
/// Fails on the first stop ID with no entry in `stops`.
pub fn assemble(
    sequences: &BTreeMap<String, Vec<String>>,
    stops: &HashMap<&str, &Stop>,
    table: &RouteTable,
) -> Result<BTreeMap<String, Route>, DatasetError> {
    let mut routes = BTreeMap::new();
    for (line, sequence) in sequences {
        let terminals = table.get(line).cloned().unwrap_or_default();
        let route_stops = sequence
            .iter()
            .map(|stop_id| {
                stops
                    .get(stop_id.as_str())
                    .map(|stop| (*stop).clone())
                    .ok_or_else(|| DatasetError::MissingStop {
                        route: line.clone(),
                        stop_id: stop_id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        routes.insert(
            line.clone(),
            Route {
                name: line.clone(),
                northbound: terminals.northbound,
                southbound: terminals.southbound,
                stops: route_stops,
            },
        );
    }
    Ok(routes)
}
