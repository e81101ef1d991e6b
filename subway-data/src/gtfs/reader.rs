//! Header-driven CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use super::error::GtfsError;
use super::records::{GtfsTable, StopRecord, StopTimeRecord, TransferRecord, TripRecord};

/// Where the static tables live.
#[derive(Debug, Clone)]
pub struct GtfsPaths {
    /// Directory holding the unpacked GTFS files
    pub dir: PathBuf,
    pub stops_file_name: String,
    pub trips_file_name: String,
    pub stop_times_file_name: String,
    pub transfers_file_name: String,
}

impl GtfsPaths {
    /// Standard GTFS file names inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stops_file_name: "stops.txt".into(),
            trips_file_name: "trips.txt".into(),
            stop_times_file_name: "stop_times.txt".into(),
            transfers_file_name: "transfers.txt".into(),
        }
    }

    /// Use a different stop-times file (e.g. a pre-filtered extract).
    pub fn with_stop_times_file_name(mut self, name: impl Into<String>) -> Self {
        self.stop_times_file_name = name.into();
        self
    }
}

/// Reader for one unpacked static GTFS directory.
#[derive(Debug, Clone)]
pub struct StaticGtfs {
    paths: GtfsPaths,
}

impl StaticGtfs {
    pub fn new(paths: GtfsPaths) -> Self {
        Self { paths }
    }

    /// Open a directory using the standard file names.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(GtfsPaths::new(dir))
    }

    pub fn paths(&self) -> &GtfsPaths {
        &self.paths
    }

    pub fn stops(&self) -> Result<Vec<StopRecord>, GtfsError> {
        self.load(&self.paths.stops_file_name)
    }

    pub fn trips(&self) -> Result<Vec<TripRecord>, GtfsError> {
        self.load(&self.paths.trips_file_name)
    }

    pub fn stop_times(&self) -> Result<Vec<StopTimeRecord>, GtfsError> {
        self.load(&self.paths.stop_times_file_name)
    }

    pub fn transfers(&self) -> Result<Vec<TransferRecord>, GtfsError> {
        self.load(&self.paths.transfers_file_name)
    }

    fn load<T: GtfsTable>(&self, file_name: &str) -> Result<Vec<T>, GtfsError> {
        let path = self.paths.dir.join(file_name);
        let now = Instant::now();
        let file = open(&path)?;
        let rows = read_table(file_name, file)?;
        debug!(file = file_name, rows = rows.len(), elapsed = ?now.elapsed(), "Loaded table");
        Ok(rows)
    }
}

fn open(path: &Path) -> Result<File, GtfsError> {
    File::open(path).map_err(|source| GtfsError::Io {
        file: path.display().to_string(),
        source,
    })
}

/// Read every row of one table.
///
/// The header row is checked for the table's required columns before any
/// row is read; the first malformed row aborts the read.
pub fn read_table<T, R>(file_name: &str, reader: R) -> Result<Vec<T>, GtfsError>
where
    T: GtfsTable,
    R: Read,
{
    let csv_error = |source| GtfsError::Csv {
        file: file_name.to_string(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?;
    for &column in T::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(GtfsError::MissingColumn {
                file: file_name.to_string(),
                column,
            });
        }
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result.map_err(csv_error)?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_resolved_by_header() {
        let data = "stop_name,stop_lat,stop_id\nCanal St,40.7,A34\nSpring St,40.72,A33\n";

        let stops: Vec<StopRecord> = read_table("stops.txt", data.as_bytes()).unwrap();

        assert_eq!(
            stops,
            vec![
                StopRecord {
                    stop_id: "A34".into(),
                    stop_name: "Canal St".into(),
                },
                StopRecord {
                    stop_id: "A33".into(),
                    stop_name: "Spring St".into(),
                },
            ]
        );
    }

    #[test]
    fn quoted_fields_with_commas() {
        let data = "stop_id,stop_name\n101,\"Van Cortlandt Park, 242 St\"\n";

        let stops: Vec<StopRecord> = read_table("stops.txt", data.as_bytes()).unwrap();

        assert_eq!(stops[0].stop_name, "Van Cortlandt Park, 242 St");
    }

    #[test]
    fn missing_column_is_reported() {
        let data = "trip_id,service_id\nT1,WKD\n";

        let err = read_table::<TripRecord, _>("trips.txt", data.as_bytes()).unwrap_err();

        match err {
            GtfsError::MissingColumn { file, column } => {
                assert_eq!(file, "trips.txt");
                assert_eq!(column, "route_id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_row_is_an_error() {
        let data = "from_stop_id,to_stop_id\n101,102\n103\n";

        let err = read_table::<TransferRecord, _>("transfers.txt", data.as_bytes()).unwrap_err();

        assert!(matches!(err, GtfsError::Csv { .. }));
    }

    #[test]
    fn header_only_table_is_empty() {
        let data = "trip_id,stop_id,arrival_time\n";

        let rows: Vec<StopTimeRecord> = read_table("stop_times.txt", data.as_bytes()).unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let gtfs = StaticGtfs::open(dir.path());

        let err = gtfs.stops().unwrap_err();

        assert!(matches!(err, GtfsError::Io { .. }));
        assert!(err.to_string().contains("stops.txt"));
    }

    #[test]
    fn reads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("trips.txt"),
            "route_id,service_id,trip_id\n1,WKD,T1\nL,WKD,T2\n",
        )
        .unwrap();

        let trips = StaticGtfs::open(dir.path()).trips().unwrap();

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[1].route_id, "L");
        assert_eq!(trips[1].trip_id, "T2");
    }

    #[test]
    fn custom_stop_times_file_name() {
        let paths = GtfsPaths::new("/data").with_stop_times_file_name("stop_times_wkd.txt");

        assert_eq!(paths.stop_times_file_name, "stop_times_wkd.txt");
        assert_eq!(paths.stops_file_name, "stops.txt");
    }
}
