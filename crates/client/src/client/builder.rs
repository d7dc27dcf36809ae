//! Client builder for constructing [`SupersetClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # Invariants
//! - `base_url` and `credentials` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::auth::SessionManager;
use crate::client::SupersetClient;
use crate::error::{ClientError, Result};
use superset_config::{
    Config, Credentials,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`SupersetClient`].
///
/// # Example
///
/// ```rust,ignore
/// use superset_client::SupersetClient;
/// use superset_config::Credentials;
///
/// let client = SupersetClient::builder()
///     .base_url("http://localhost:8088".to_string())
///     .credentials(Credentials::new("admin", "admin"))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct SupersetClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl Default for SupersetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SupersetClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Superset server, e.g. `http://localhost:8088`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the login credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the per-request timeout. Default is 5 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from resolved configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(config.credentials.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"http://localhost:8088/"` -> `"http://localhost:8088"`
    /// - `"http://localhost:8088"` -> `"http://localhost:8088"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SupersetClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::InvalidRequest`] if `credentials` were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SupersetClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::InvalidRequest("credentials are required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(SupersetClient {
            http,
            base_url,
            session_manager: SessionManager::new(credentials),
            timeout: self.timeout,
        })
    }
}
