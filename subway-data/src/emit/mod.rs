//! Generated artifacts and how they reach disk.
//!
//! Every artifact is rendered in memory first. Files are then staged as
//! temporary files in the output directory and only renamed into place
//! once all of them were written, so a failed run leaves no artifacts
//! behind.

mod error;
mod json;
mod literal;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

pub use error::EmitError;
pub use json::to_json;
pub use literal::{routes_literal, stops_by_name_literal};

use crate::dataset::Dataset;

pub const ROUTES_JSON: &str = "nyc-subway-routes.json";
pub const SYNONYMS_JSON: &str = "nyc-subway-synonyms.json";
pub const STOPS_BY_NAME_JSON: &str = "nyc-subway-stops-by-name.json";
pub const ROUTES_LITERAL: &str = "nyc_subway_routes.rs";
pub const STOPS_BY_NAME_LITERAL: &str = "nyc_subway_stops_by_name.rs";

/// One output file, fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: Vec<u8>,
}

/// Render every artifact of a dataset.
pub fn render(dataset: &Dataset) -> Result<Vec<Artifact>, EmitError> {
    Ok(vec![
        Artifact {
            file_name: ROUTES_JSON,
            contents: to_json(ROUTES_JSON, &dataset.routes)?,
        },
        Artifact {
            file_name: SYNONYMS_JSON,
            contents: to_json(SYNONYMS_JSON, &dataset.synonyms)?,
        },
        Artifact {
            file_name: STOPS_BY_NAME_JSON,
            contents: to_json(STOPS_BY_NAME_JSON, &dataset.stops_by_name)?,
        },
        Artifact {
            file_name: ROUTES_LITERAL,
            contents: routes_literal(&dataset.routes)?.into_bytes(),
        },
        Artifact {
            file_name: STOPS_BY_NAME_LITERAL,
            contents: stops_by_name_literal(&dataset.stops_by_name)?.into_bytes(),
        },
    ])
}

/// Write all artifacts into `dir`, creating it if needed.
///
/// Nothing is renamed into place until every artifact has been staged.
/// Returns the final paths in artifact order.
pub fn write_all(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, EmitError> {
    std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;

    let mut staged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(artifact.file_name);
        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| io_error(&path, source))?;
        tmp.write_all(&artifact.contents)
            .and_then(|()| tmp.flush())
            .map_err(|source| io_error(&path, source))?;
        debug!(path = %path.display(), bytes = artifact.contents.len(), "Staged artifact");
        staged.push((tmp, path));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (tmp, path) in staged {
        tmp.persist(&path)
            .map_err(|err| io_error(&path, err.error))?;
        info!(path = %path.display(), "Wrote artifact");
        written.push(path);
    }
    Ok(written)
}

fn io_error(path: &Path, source: std::io::Error) -> EmitError {
    EmitError::Io {
        path: path.display().to_string(),
        source,
    }
}
