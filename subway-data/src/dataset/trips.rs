//! Canonical stop sequence per route.
//!
//! Schedules contain many trip patterns per line: short turns, express
//! runs, late-night variants. The longest recorded trip is taken as the
//! full pattern of the line. This is a heuristic and can pick the wrong
//! branch on lines that fork.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::domain::{Direction, RouteTable, split_stop_id};
use crate::gtfs::{StopTimeRecord, TripRecord};

/// Map trip ID → route ID, keeping only routes in the table.
pub fn routes_by_trip(trips: &[TripRecord], table: &RouteTable) -> HashMap<String, String> {
    trips
        .iter()
        .filter(|trip| table.contains(&trip.route_id))
        .map(|trip| (trip.trip_id.clone(), trip.route_id.clone()))
        .collect()
}

/// Stop sequences of one route in one direction, in first-seen trip order.
#[derive(Debug, Default)]
struct DirectionTrips {
    sequences: Vec<Vec<String>>,
    by_trip: HashMap<String, usize>,
}

impl DirectionTrips {
    fn push(&mut self, trip_id: &str, stop_id: &str) {
        let idx = match self.by_trip.get(trip_id) {
            Some(idx) => *idx,
            None => {
                self.sequences.push(Vec::new());
                let idx = self.sequences.len() - 1;
                self.by_trip.insert(trip_id.to_string(), idx);
                idx
            }
        };
        self.sequences[idx].push(stop_id.to_string());
    }
}

/// Per-route, per-direction, per-trip stop sequences.
#[derive(Debug, Default)]
pub struct TripStops {
    northbound: HashMap<String, DirectionTrips>,
    southbound: HashMap<String, DirectionTrips>,
}

impl TripStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket stop-time rows by route, direction and trip.
    ///
    /// Rows are taken in file order. Rows whose trip is not in
    /// `routes_by_trip` are skipped.
    pub fn collect(stop_times: &[StopTimeRecord], routes_by_trip: &HashMap<String, String>) -> Self {
        let mut trip_stops = Self::new();
        let mut skipped = 0usize;
        for row in stop_times {
            match routes_by_trip.get(&row.trip_id) {
                Some(route) => trip_stops.push(route, &row.trip_id, &row.stop_id),
                None => skipped += 1,
            }
        }
        debug!(
            rows = stop_times.len(),
            skipped, "Bucketed stop times by route"
        );
        trip_stops
    }

    /// Record one call of `trip_id` at a platform stop ID such as `"101N"`.
    pub fn push(&mut self, route: &str, trip_id: &str, platform_stop_id: &str) {
        let (stop_id, direction) = split_stop_id(platform_stop_id);
        let bucket = match direction {
            Direction::Northbound => &mut self.northbound,
            Direction::Southbound => &mut self.southbound,
        };
        bucket
            .entry(route.to_string())
            .or_default()
            .push(trip_id, stop_id);
    }

    /// The longest trip of `route`, in southbound order.
    ///
    /// Northbound trips are scanned first; the first strictly longest one
    /// is reversed. A southbound trip then only wins if it is strictly
    /// longer than that. Returns `None` when the route has no trips.
    pub fn longest(&self, route: &str) -> Option<Vec<String>> {
        let mut best: Option<Vec<String>> = None;
        let mut max = 0;

        if let Some(trips) = self.northbound.get(route) {
            for sequence in &trips.sequences {
                if sequence.len() > max {
                    max = sequence.len();
                    best = Some(sequence.iter().rev().cloned().collect());
                }
            }
        }
        if let Some(trips) = self.southbound.get(route) {
            for sequence in &trips.sequences {
                if sequence.len() > max {
                    max = sequence.len();
                    best = Some(sequence.clone());
                }
            }
        }
        best
    }

    /// One canonical sequence for every route in the table that has trips.
    pub fn canonical_sequences(&self, table: &RouteTable) -> BTreeMap<String, Vec<String>> {
        let mut sequences = BTreeMap::new();
        for line in table.lines() {
            match self.longest(line) {
                Some(sequence) => {
                    debug!(route = line, stops = sequence.len(), "Selected canonical trip");
                    sequences.insert(line.to_string(), sequence);
                }
                None => warn!(route = line, "No trips found for route, skipping"),
            }
        }
        sequences
    }
}
