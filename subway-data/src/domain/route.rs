//! Routes, stops and the transfers between them.
//!
//! Field names in the serialized form match what the arrival lookup tool
//! reads, so they are renamed explicitly rather than derived.

use serde::{Deserialize, Serialize};

use crate::names::{StopNames, normalize};

/// "This stop is also served by `route`", optionally at a linked stop ID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(rename = "StopID")]
    pub stop_id: String,
    #[serde(rename = "Route")]
    pub route: String,
}

impl Transfer {
    pub fn new(stop_id: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            stop_id: stop_id.into(),
            route: route.into(),
        }
    }
}

/// A physical station with its derived names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "ID")]
    pub id: String,

    /// Name exactly as it appears in the agency's stop table.
    #[serde(rename = "MTAName")]
    pub mta_name: String,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    /// Normalized lookup key used to match spoken or typed names.
    #[serde(rename = "PhoneticName")]
    pub phonetic_name: String,

    #[serde(rename = "Synonyms")]
    pub synonyms: Vec<String>,

    /// Other routes reachable from this stop. Empty until transfers are linked.
    #[serde(rename = "Transfers", default)]
    pub transfers: Vec<Transfer>,
}

impl Stop {
    /// Build a stop from its ID and raw agency name, deriving every other name.
    pub fn from_agency_name(id: impl Into<String>, mta_name: impl Into<String>) -> Self {
        let mta_name = mta_name.into();
        let StopNames {
            display,
            phonetic,
            synonyms,
        } = normalize(&mta_name);

        Self {
            id: id.into(),
            mta_name,
            display_name: display,
            phonetic_name: phonetic,
            synonyms,
            transfers: Vec::new(),
        }
    }
}

/// One line with its canonical stop order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Line code, e.g. `"4"` or `"N"`.
    #[serde(rename = "Name")]
    pub name: String,

    /// Terminal label shown for northbound trains.
    #[serde(rename = "Northbound")]
    pub northbound: String,

    /// Terminal label shown for southbound trains.
    #[serde(rename = "Southbound")]
    pub southbound: String,

    /// Stops in physical trip order.
    #[serde(rename = "Stops")]
    pub stops: Vec<Stop>,
}

impl Route {
    /// Whether this route calls at the given stop ID.
    pub fn serves(&self, stop_id: &str) -> bool {
        self.stops.iter().any(|stop| stop.id == stop_id)
    }
}

/// Flattened synonym view over stops, one record per phonetic value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub value: String,
    pub synonyms: Vec<String>,
}
