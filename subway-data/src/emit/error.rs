//! Output error types.

/// Errors rendering or writing generated artifacts.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Serializing to JSON failed
    #[error("unable to encode {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Formatting a source literal failed
    #[error("unable to format source literal: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Writing to the output directory failed
    #[error("unable to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
