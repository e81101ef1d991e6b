//! Realtime feed HTTP client.
//!
//! One GET per call, no retries. The caller decides what to do with a
//! failed fetch.

use std::time::Instant;

use prost::Message;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use super::error::FeedError;
use super::feed_group::FeedGroup;
use super::proto::FeedMessage;

/// Default base URL of the agency's feed endpoint.
const DEFAULT_BASE_URL: &str = "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// How the API key is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiKeyPlacement {
    /// `x-api-key` request header
    #[default]
    Header,
    /// `key` query parameter
    Query,
}

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL; the feed group path is appended
    pub base_url: String,
    pub key_placement: ApiKeyPlacement,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            key_placement: ApiKeyPlacement::default(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_key_placement(mut self, placement: ApiKeyPlacement) -> Self {
        self.key_placement = placement;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the agency's GTFS-realtime feeds.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
    /// Set when the key goes in the query string
    query_key: Option<String>,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        let query_key = match config.key_placement {
            ApiKeyPlacement::Header => {
                let api_key =
                    HeaderValue::from_str(&config.api_key).map_err(|_| FeedError::InvalidApiKey)?;
                headers.insert(API_KEY_HEADER, api_key);
                None
            }
            ApiKeyPlacement::Query => Some(config.api_key),
        };

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            query_key,
        })
    }

    /// Full URL of one feed group.
    pub fn feed_url(&self, group: FeedGroup) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), group.path())
    }

    /// Fetch and decode the current feed of `group`.
    pub async fn fetch(&self, group: FeedGroup) -> Result<FeedMessage, FeedError> {
        let url = self.feed_url(group);
        let now = Instant::now();

        let mut request = self.http.get(&url);
        if let Some(key) = &self.query_key {
            request = request.query(&[("key", key)]);
        }
        let response = request.send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FeedError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = response.bytes().await?;
        let feed = decode_feed(&bytes)?;

        debug!(
            feed = %group,
            bytes = bytes.len(),
            entities = feed.entity.len(),
            elapsed = ?now.elapsed(),
            "Fetched realtime feed"
        );
        Ok(feed)
    }
}

/// Decode a feed message from a response body.
pub fn decode_feed(bytes: &[u8]) -> Result<FeedMessage, FeedError> {
    Ok(FeedMessage::decode(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = FeedConfig::new("secret")
            .with_base_url("http://localhost:8080/feeds/")
            .with_key_placement(ApiKeyPlacement::Query)
            .with_timeout(5);

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://localhost:8080/feeds/");
        assert_eq!(config.key_placement, ApiKeyPlacement::Query);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn default_config() {
        let config = FeedConfig::new("secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.key_placement, ApiKeyPlacement::Header);
    }

    #[test]
    fn feed_url_joins_group_path() {
        let client =
            FeedClient::new(FeedConfig::new("k").with_base_url("http://localhost/feeds/")).unwrap();
        assert_eq!(
            client.feed_url(FeedGroup::Ace),
            "http://localhost/feeds/nyct%2Fgtfs-ace"
        );

        let client = FeedClient::new(FeedConfig::new("k")).unwrap();
        assert_eq!(
            client.feed_url(FeedGroup::Numbered),
            "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs"
        );
    }

    #[test]
    fn header_key_must_be_valid() {
        let err = FeedClient::new(FeedConfig::new("bad\nkey")).unwrap_err();
        assert!(matches!(err, FeedError::InvalidApiKey));

        // a query key is sent URL-encoded, so anything goes
        let config = FeedConfig::new("bad\nkey").with_key_placement(ApiKeyPlacement::Query);
        assert!(FeedClient::new(config).is_ok());
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = decode_feed(b"<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    /// Serve one canned HTTP response on a local port.
    ///
    /// Returns the base URL and a handle yielding the raw request head.
    async fn serve_once(
        status_line: &str,
        body: Vec<u8>,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let mut response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend(body);

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(&response).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str, placement: ApiKeyPlacement) -> FeedClient {
        let config = FeedConfig::new("secret")
            .with_base_url(base_url)
            .with_key_placement(placement)
            .with_timeout(5);
        FeedClient::new(config).unwrap()
    }

    fn empty_feed() -> Vec<u8> {
        FeedMessage {
            header: super::super::proto::FeedHeader {
                gtfs_realtime_version: "2.0".into(),
                timestamp: Some(1_700_000_000),
            },
            entity: Vec::new(),
        }
        .encode_to_vec()
    }

    #[tokio::test]
    async fn fetch_sends_header_key_to_group_path() {
        let (url, server) = serve_once("200 OK", empty_feed()).await;

        let feed = client(&url, ApiKeyPlacement::Header)
            .fetch(FeedGroup::Ace)
            .await
            .unwrap();

        assert_eq!(feed.header.gtfs_realtime_version, "2.0");
        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /nyct%2fgtfs-ace http/1.1"));
        assert!(request.contains("x-api-key: secret"));
    }

    #[tokio::test]
    async fn fetch_sends_query_key() {
        let (url, server) = serve_once("200 OK", empty_feed()).await;

        client(&url, ApiKeyPlacement::Query)
            .fetch(FeedGroup::L)
            .await
            .unwrap();

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /nyct%2Fgtfs-l?key=secret "));
        assert!(!request.to_ascii_lowercase().contains("x-api-key"));
    }

    #[tokio::test]
    async fn rejected_key_is_unauthorized() {
        for status in ["401 Unauthorized", "403 Forbidden"] {
            let (url, server) = serve_once(status, Vec::new()).await;

            let err = client(&url, ApiKeyPlacement::Header)
                .fetch(FeedGroup::G)
                .await
                .unwrap_err();

            assert!(matches!(err, FeedError::Unauthorized), "{status}: {err}");
            server.await.unwrap();
        }
    }

    #[tokio::test]
    async fn other_failure_status_is_api_error() {
        let (url, server) = serve_once("503 Service Unavailable", b"down".to_vec()).await;

        let err = client(&url, ApiKeyPlacement::Header)
            .fetch(FeedGroup::Numbered)
            .await
            .unwrap_err();

        match err {
            FeedError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let (url, server) =
            serve_once("200 OK", b"<html>Service Unavailable</html>".to_vec()).await;

        let err = client(&url, ApiKeyPlacement::Header)
            .fetch(FeedGroup::Jz)
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::Decode(_)), "{err}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"), ApiKeyPlacement::Header)
            .fetch(FeedGroup::Sir)
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::Http(_)), "{err}");
    }
}
