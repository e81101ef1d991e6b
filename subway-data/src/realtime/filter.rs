//! Narrow a decoded feed down to one stop on one line.

use chrono::{DateTime, Utc};

use crate::domain::Direction;

use super::proto::{Alert, FeedMessage, StopTimeUpdate};

/// At most this many departures are kept per direction.
pub const MAX_DEPARTURES: usize = 5;

/// Upcoming departures at one stop, with any alerts in the feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrivals {
    pub alerts: Vec<Alert>,
    pub northbound: Vec<DateTime<Utc>>,
    pub southbound: Vec<DateTime<Utc>>,
}

/// Updates matching `stop_id` on `line`, split by direction.
///
/// Matching is a prefix match on the update's stop ID and an exact match
/// on the trip's route. Updates whose stop ID carries no `N`/`S` suffix
/// are dropped. Every alert in the feed is returned, matched or not.
pub fn trains<'a>(
    feed: &'a FeedMessage,
    stop_id: &str,
    line: &str,
) -> (Vec<&'a Alert>, Vec<&'a StopTimeUpdate>, Vec<&'a StopTimeUpdate>) {
    let mut alerts = Vec::new();
    let mut northbound = Vec::new();
    let mut southbound = Vec::new();

    for entity in &feed.entity {
        if let Some(alert) = &entity.alert {
            alerts.push(alert);
        }
        let Some(trip_update) = &entity.trip_update else {
            continue;
        };
        if trip_update.trip.route_id.as_deref() != Some(line) {
            continue;
        }
        for update in &trip_update.stop_time_update {
            let Some(update_stop) = update.stop_id.as_deref() else {
                continue;
            };
            if !update_stop.starts_with(stop_id) {
                continue;
            }
            match Direction::from_stop_id(update_stop) {
                Some(Direction::Northbound) => northbound.push(update),
                Some(Direction::Southbound) => southbound.push(update),
                None => {}
            }
        }
    }
    (alerts, northbound, southbound)
}

/// The soonest departures strictly after `now`, ascending.
///
/// Departure is the event time plus its delay in seconds. Updates with no
/// departure time, or one outside the representable range, are skipped.
pub fn next_train_times<'a>(
    updates: impl IntoIterator<Item = &'a StopTimeUpdate>,
    now: DateTime<Utc>,
) -> Vec<DateTime<Utc>> {
    let mut times: Vec<DateTime<Utc>> = updates
        .into_iter()
        .filter_map(|update| {
            let departure = update.departure.as_ref()?;
            let secs = departure
                .time?
                .checked_add(i64::from(departure.delay.unwrap_or(0)))?;
            DateTime::from_timestamp(secs, 0)
        })
        .filter(|time| *time > now)
        .collect();
    times.sort();
    times.truncate(MAX_DEPARTURES);
    times
}

/// Alerts and next departures in both directions for one stop and line.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use subway_data::realtime::{FeedHeader, FeedMessage, next_arrivals};
///
/// let feed = FeedMessage {
///     header: FeedHeader { gtfs_realtime_version: "1.0".into(), timestamp: None },
///     entity: vec![],
/// };
/// let arrivals = next_arrivals(&feed, "635", "6", Utc::now());
/// assert!(arrivals.northbound.is_empty());
/// ```
pub fn next_arrivals(feed: &FeedMessage, stop_id: &str, line: &str, now: DateTime<Utc>) -> Arrivals {
    let (alerts, northbound, southbound) = trains(feed, stop_id, line);
    Arrivals {
        alerts: alerts.into_iter().cloned().collect(),
        northbound: next_train_times(northbound, now),
        southbound: next_train_times(southbound, now),
    }
}
