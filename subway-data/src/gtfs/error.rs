//! GTFS reader error types.

/// Errors reading a static GTFS table.
#[derive(Debug, thiserror::Error)]
pub enum GtfsError {
    /// The table file could not be opened
    #[error("unable to open {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read or deserialized
    #[error("unable to read {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks a column the table needs
    #[error("{file} is missing column {column}")]
    MissingColumn { file: String, column: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GtfsError::MissingColumn {
            file: "stops.txt".into(),
            column: "stop_name",
        };
        assert_eq!(err.to_string(), "stops.txt is missing column stop_name");

        let err = GtfsError::Io {
            file: "trips.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "unable to open trips.txt: not found");
    }
}
