//! Configuration types for the Superset admin CLI.
//!
//! Responsibilities:
//! - Define connection settings (host URL, timeout).
//! - Define the login credentials used to obtain a bearer token.
//! - Combine both into the resolved `Config`.
//!
//! Does NOT handle:
//! - Loading values from `.env`, environment or flags (see `loader` module).
//! - Any network activity (see client crate).
//!
//! Invariants:
//! - `base_url` never ends with a trailing slash once built by `ConfigLoader`.
//! - The password is only reachable through `ExposeSecret`.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PASSWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME};

/// Connection configuration for a Superset server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Superset server (e.g., http://localhost:8088)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Username/password pair sent to the login endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

/// Fully resolved configuration for one CLI invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub credentials: Credentials,
}

impl Config {
    /// Returns true when the built-in `admin`/`admin` credentials are in use.
    pub fn is_using_default_credentials(&self) -> bool {
        self.credentials.username == DEFAULT_USERNAME
            && self.credentials.password.expose_secret() == DEFAULT_PASSWORD
    }
}
