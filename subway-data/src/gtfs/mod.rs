//! Static GTFS table readers.
//!
//! Only the four tables the dataset needs are read: stops, trips,
//! stop times and transfers. Columns are matched by header name, so
//! column order in the files does not matter and extra columns are
//! ignored.

mod error;
mod reader;
mod records;

pub use error::GtfsError;
pub use reader::{GtfsPaths, StaticGtfs, read_table};
pub use records::{GtfsTable, StopRecord, StopTimeRecord, TransferRecord, TripRecord};
