//! Line codes and their terminal labels.
//!
//! Terminal labels are not derivable from the static tables, so they are
//! supplied as configuration. The table also decides which lines are built
//! at all: trips on lines outside the table are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors loading a route table from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RouteTableError {
    #[error("unable to read route table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Labels for the two ends of a line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminals {
    pub northbound: String,
    pub southbound: String,
}

impl Terminals {
    pub fn new(northbound: impl Into<String>, southbound: impl Into<String>) -> Self {
        Self {
            northbound: northbound.into(),
            southbound: southbound.into(),
        }
    }
}

/// Line code → terminal labels.
///
/// Iteration is in line-code order, which keeps generated output stable
/// from run to run.
///
/// # Examples
///
/// ```
/// use subway_data::domain::RouteTable;
///
/// let table = RouteTable::new().with_route("L", "Manhattan", "Brooklyn");
/// assert!(table.contains("L"));
/// assert_eq!(table.get("L").unwrap().southbound, "Brooklyn");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: BTreeMap<String, Terminals>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line, replacing any existing entry for the same code.
    pub fn with_route(
        mut self,
        code: impl Into<String>,
        northbound: impl Into<String>,
        southbound: impl Into<String>,
    ) -> Self {
        self.insert(code, Terminals::new(northbound, southbound));
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, terminals: Terminals) {
        self.routes.insert(code.into(), terminals);
    }

    pub fn get(&self, code: &str) -> Option<&Terminals> {
        self.routes.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.routes.contains_key(code)
    }

    /// Line codes in ascending order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Parse a table from JSON of the form
    /// `{"L": {"northbound": "Manhattan", "southbound": "Brooklyn"}}`.
    pub fn from_json_str(json: &str) -> Result<Self, RouteTableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RouteTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RouteTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The New York City subway lines.
    pub fn nyc_subway() -> Self {
        Self::new()
            .with_route("1", "Bronx", "South Ferry")
            .with_route("2", "Bronx", "Brooklyn")
            .with_route("3", "Harlem", "Brooklyn")
            .with_route("4", "Bronx", "Brooklyn")
            .with_route("5", "Bronx", "Brooklyn")
            .with_route("5X", "Bronx", "Brooklyn")
            .with_route("6", "Bronx", "Brooklyn Brdg")
            .with_route("6X", "Bronx", "Brooklyn Brdg")
            .with_route("7", "Queens", "Manhattan")
            .with_route("S", "", "")
            .with_route("L", "Manhattan", "Brooklyn")
            .with_route("A", "Manhattan", "Queens")
            .with_route("B", "Bronx", "Brooklyn")
            .with_route("C", "Manhattan", "Brooklyn")
            .with_route("D", "Bronx", "Brooklyn")
            .with_route("E", "Queens", "Manhattan")
            .with_route("F", "Queens", "Brooklyn")
            .with_route("G", "Queens", "Brooklyn")
            .with_route("J", "Queens", "Manhattan")
            .with_route("M", "Queens", "Brooklyn")
            .with_route("N", "Manhattan", "Brooklyn")
            .with_route("Q", "Manhattan", "Brooklyn")
            .with_route("R", "Queens", "Brooklyn")
            .with_route("W", "Queens", "Manhattan")
            .with_route("Z", "Queens", "Manhattan")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nyc_subway_table() {
        let table = RouteTable::nyc_subway();

        assert_eq!(table.len(), 25);
        assert_eq!(
            table.get("1"),
            Some(&Terminals::new("Bronx", "South Ferry"))
        );
        assert_eq!(table.get("S"), Some(&Terminals::default()));
        assert!(!table.contains("H"));
    }

    #[test]
    fn lines_are_sorted() {
        let table = RouteTable::new()
            .with_route("Q", "Manhattan", "Brooklyn")
            .with_route("1", "Bronx", "South Ferry")
            .with_route("G", "Queens", "Brooklyn");

        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines, vec!["1", "G", "Q"]);
    }

    #[test]
    fn with_route_replaces_existing() {
        let table = RouteTable::new()
            .with_route("L", "Manhattan", "Brooklyn")
            .with_route("L", "8 Av", "Canarsie");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("L").unwrap().northbound, "8 Av");
    }

    #[test]
    fn from_json_str() {
        let table = RouteTable::from_json_str(
            r#"{"G": {"northbound": "Queens", "southbound": "Brooklyn"}}"#,
        )
        .unwrap();

        assert_eq!(table.get("G"), Some(&Terminals::new("Queens", "Brooklyn")));
    }

    #[test]
    fn from_json_str_rejects_bad_shape() {
        let err = RouteTable::from_json_str(r#"["G"]"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid route table"));
    }

    #[test]
    fn from_json_file_reports_path() {
        let err = RouteTable::from_json_file("/nonexistent/routes.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/routes.json"));
    }
}
