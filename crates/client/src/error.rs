//! Error types for the Superset client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Superset client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the Superset API.
    ///
    /// `body` holds the raw response text so callers can show what the
    /// server said.
    #[error("API error ({status}) at {url}")]
    ApiError {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused or host unreachable.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request could not be built from the supplied method, headers or body.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Classify a transport-level `reqwest` failure.
    pub(crate) fn from_transport(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::ConnectionRefused(url.to_string())
        } else {
            Self::HttpError(err)
        }
    }

    /// Response body text attached to this error, if the server sent one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
