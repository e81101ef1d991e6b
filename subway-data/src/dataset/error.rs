//! Dataset build error types.

use crate::gtfs::GtfsError;

/// Errors that abort a dataset build.
///
/// Any of these means the source data is unusable as a whole; nothing is
/// written when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A source table could not be read
    #[error(transparent)]
    Gtfs(#[from] GtfsError),

    /// A trip calls at a stop that is not in the stop table
    #[error("no stop data for stop {stop_id} (route {route})")]
    MissingStop { route: String, stop_id: String },
}
