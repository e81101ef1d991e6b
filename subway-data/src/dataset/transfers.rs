//! Cross-route transfer links.
//!
//! A stop gets a transfer for every other route that calls at the same
//! stop ID, and for every other route that calls at a stop the transfer
//! table links it to. Links are computed per stop; if the transfer table
//! lists A→B but not B→A, only A gets the link.
//!
//! Every stop is compared against every stop of every other route. The
//! dataset is a few hundred stops, so the quadratic scan is fine offline.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::domain::{Route, Transfer};
use crate::gtfs::TransferRecord;

/// Explicit from-stop → to-stop links from the transfer table.
#[derive(Debug, Clone, Default)]
pub struct TransferMap {
    targets: HashMap<String, Vec<String>>,
}

impl TransferMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from transfer rows, dropping self links and repeated targets.
    pub fn from_records(records: &[TransferRecord]) -> Self {
        let mut map = Self::new();
        for row in records {
            map.insert(&row.from_stop_id, &row.to_stop_id);
        }
        map
    }

    /// Add a link. Returns `false` if it was a self link or already present.
    pub fn insert(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        let targets = self.targets.entry(from.to_string()).or_default();
        if targets.iter().any(|t| t == to) {
            return false;
        }
        targets.push(to.to_string());
        true
    }

    /// Stops linked from `from`, in first-seen order.
    pub fn targets(&self, from: &str) -> &[String] {
        self.targets.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fill in `transfers` on every stop of every route.
///
/// Each list is sorted by route name, then stop ID, without duplicates,
/// and never names the stop's own route.
pub fn link_transfers(routes: &mut BTreeMap<String, Route>, explicit: &TransferMap) {
    let all: &BTreeMap<String, Route> = routes;
    let linked: Vec<(String, Vec<Vec<Transfer>>)> = all
        .iter()
        .map(|(line, route)| {
            let per_stop = route
                .stops
                .iter()
                .map(|stop| transfers_for(&stop.id, line, all, explicit))
                .collect();
            (line.clone(), per_stop)
        })
        .collect();

    let mut total = 0;
    for (line, per_stop) in linked {
        if let Some(route) = routes.get_mut(&line) {
            for (stop, transfers) in route.stops.iter_mut().zip(per_stop) {
                total += transfers.len();
                stop.transfers = transfers;
            }
        }
    }
    debug!(transfers = total, "Linked transfers");
}

fn transfers_for(
    stop_id: &str,
    line: &str,
    routes: &BTreeMap<String, Route>,
    explicit: &TransferMap,
) -> Vec<Transfer> {
    let mut transfers: Vec<Transfer> = other_routes_serving(routes, line, stop_id)
        .map(|other| Transfer::new(stop_id, other))
        .collect();

    for target in explicit.targets(stop_id) {
        if target == stop_id {
            continue;
        }
        transfers.extend(
            other_routes_serving(routes, line, target).map(|other| Transfer::new(target, other)),
        );
    }

    transfers.sort_by(|a, b| {
        a.route
            .cmp(&b.route)
            .then_with(|| a.stop_id.cmp(&b.stop_id))
    });
    transfers.dedup();
    transfers
}

/// Names of routes other than `line` calling at `stop_id`.
fn other_routes_serving<'a>(
    routes: &'a BTreeMap<String, Route>,
    line: &'a str,
    stop_id: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    routes
        .iter()
        .filter(move |(other, route)| other.as_str() != line && route.serves(stop_id))
        .map(|(other, _)| other.as_str())
}
