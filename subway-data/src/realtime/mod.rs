//! Live departures from the agency's GTFS-realtime feeds.
//!
//! [`FeedClient`] fetches one feed group; [`next_arrivals`] reduces the
//! decoded feed to the soonest departures at one stop on one line.

mod client;
mod error;
mod feed_group;
mod filter;
mod proto;

pub use client::{ApiKeyPlacement, FeedClient, FeedConfig, decode_feed};
pub use error::FeedError;
pub use feed_group::{FeedGroup, UnknownFeedGroup};
pub use filter::{Arrivals, MAX_DEPARTURES, next_arrivals, next_train_times, trains};
pub use proto::{
    Alert, FeedEntity, FeedHeader, FeedMessage, StopTimeEvent, StopTimeUpdate, TranslatedString,
    Translation, TripDescriptor, TripUpdate,
};
