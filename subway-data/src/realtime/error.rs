//! Feed client error types.

/// Errors fetching or decoding a realtime feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("unable to get feed: {0}")]
    Http(#[from] reqwest::Error),

    /// Key rejected by the agency
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Any other non-success status
    #[error("feed API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body is not a feed message
    #[error("unable to parse feed: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Key cannot be sent as a header value
    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,
}
