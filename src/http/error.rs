//! Error surface of the HTTP client.

use thiserror::Error;
use url::Url;

use crate::retry::ConfigError;

/// Rejected [`super::ClientConfig`], reported at client construction.
#[derive(Debug, Error)]
pub enum ClientConfigError {
    #[error("request timeout must be greater than zero")]
    Timeout,
    /// The embedded retry policy is unusable.
    #[error(transparent)]
    Retry(#[from] ConfigError),
    /// The underlying transport could not be assembled.
    #[error("failed to build http transport: {0}")]
    Transport(#[from] reqwest::Error),
}

/// What went wrong while serializing, reading, or parsing a payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response body could not be read off the wire.
    #[error("body read: {0}")]
    BodyRead(#[from] reqwest::Error),
    /// JSON serialization or deserialization failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of one logical call, classified at the point it occurred.
///
/// Every variant carries the target URL so callers can log the failed
/// endpoint without threading it separately.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The peer could not be reached at all (dial, TLS, timeout). No
    /// response body exists for these.
    #[error("failed to call {url} due to transport error: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    /// Request serialization, body read, or response parsing failed.
    #[error("failed to call {url} due to decode error: {source}")]
    Decode {
        url: Url,
        #[source]
        source: DecodeError,
    },
    /// The peer answered with an error status. Carries the raw body so the
    /// caller can surface whatever diagnostics the server sent.
    #[error("failed to call {url} due to HTTP error {status} with body `{}`", String::from_utf8_lossy(.body))]
    Status {
        url: Url,
        status: u16,
        body: Vec<u8>,
    },
    /// The caller's cancellation token fired before the call resolved.
    #[error("request cancelled")]
    Cancelled,
}

impl HttpError {
    /// Whether a later attempt could plausibly succeed. Transport failures
    /// always can; decode failures never can; status failures only for
    /// server-side (5xx) errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            HttpError::Transport { .. } => true,
            HttpError::Decode { .. } => false,
            HttpError::Status { status, .. } => *status >= 500,
            HttpError::Cancelled => false,
        }
    }

    /// The HTTP status code, when the peer produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
