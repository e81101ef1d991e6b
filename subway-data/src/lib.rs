//! Subway route/stop data for a transit-arrival lookup tool.
//!
//! Two independent halves:
//!
//! - an offline build that turns the agency's static GTFS tables into
//!   routes with normalized stop names, synonyms and transfers
//!   ([`dataset`], written out by [`emit`])
//! - a live lookup that fetches one realtime feed and keeps the next few
//!   departures at a stop ([`realtime`])

pub mod dataset;
pub mod domain;
pub mod emit;
pub mod gtfs;
pub mod names;
pub mod realtime;
