//! Static route/stop dataset build.
//!
//! The build runs in four steps:
//!
//! 1. every stop-table row is normalized into a `Stop`
//! 2. the longest trip of each configured route becomes its stop order
//! 3. the stop order is joined with the stops into `Route`s
//! 4. transfers are linked across routes
//!
//! A stop ID used by a trip but missing from the stop table fails the whole
//! build.

mod assemble;
mod error;
mod lookup;
mod transfers;
mod trips;


use std::collections::BTreeMap;
use std::time::Instant;

use tracing::info;

pub use assemble::{assemble, index_stops, stops_from_records};
pub use error::DatasetError;
pub use lookup::{StopsByName, stops_by_name, synonym_records};
pub use transfers::{TransferMap, link_transfers};
pub use trips::{TripStops, routes_by_trip};

use crate::domain::{Route, RouteTable, Synonym};
use crate::gtfs::{GtfsError, StaticGtfs, StopRecord, StopTimeRecord, TransferRecord, TripRecord};

/// The four static tables, already read.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub stops: Vec<StopRecord>,
    pub trips: Vec<TripRecord>,
    pub stop_times: Vec<StopTimeRecord>,
    pub transfers: Vec<TransferRecord>,
}

impl SourceTables {
    /// Read all four tables, failing on the first unreadable one.
    pub fn load(gtfs: &StaticGtfs) -> Result<Self, GtfsError> {
        Ok(Self {
            stops: gtfs.stops()?,
            trips: gtfs.trips()?,
            stop_times: gtfs.stop_times()?,
            transfers: gtfs.transfers()?,
        })
    }
}

/// Everything the generator writes out.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Line code → route with stops and transfers.
    pub routes: BTreeMap<String, Route>,
    /// Synonym records over the whole stop table.
    pub synonyms: Vec<Synonym>,
    /// Phonetic name or synonym → line code → stop ID.
    pub stops_by_name: StopsByName,
}

impl Dataset {
    /// Read the static tables and build the dataset.
    pub fn load(gtfs: &StaticGtfs, table: &RouteTable) -> Result<Self, DatasetError> {
        let sources = SourceTables::load(gtfs)?;
        Self::build(&sources, table)
    }

    /// Build the dataset from tables already in memory.
    pub fn build(sources: &SourceTables, table: &RouteTable) -> Result<Self, DatasetError> {
        let now = Instant::now();

        let stops = stops_from_records(&sources.stops);
        let stop_index = index_stops(&stops);

        let trip_routes = routes_by_trip(&sources.trips, table);
        let trip_stops = TripStops::collect(&sources.stop_times, &trip_routes);
        let sequences = trip_stops.canonical_sequences(table);

        let mut routes = assemble(&sequences, &stop_index, table)?;
        let explicit = TransferMap::from_records(&sources.transfers);
        link_transfers(&mut routes, &explicit);

        let synonyms = synonym_records(&stops);
        let stops_by_name = stops_by_name(&routes);

        info!(
            routes = routes.len(),
            stops = stop_index.len(),
            trips = trip_routes.len(),
            explicit_transfers = explicit.len(),
            synonyms = synonyms.len(),
            elapsed = ?now.elapsed(),
            "Built dataset"
        );

        Ok(Self {
            routes,
            synonyms,
            stops_by_name,
        })
    }
}
