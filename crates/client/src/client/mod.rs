//! Main Superset REST API client.
//!
//! This module provides the primary [`SupersetClient`] for the security
//! administration surface of the Superset REST API. It logs in on first use
//! and attaches the resulting bearer token to every follow-on request.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and token retrieval helpers (private module)
//! - `security`: Role, user and permission methods plus the generic request
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - At most one login call per client; the token is reused for every request
//! - No retries: a failed request is returned to the caller as-is
//! - Requests are issued one at a time (`&mut self` on every call)

pub mod builder;
mod security;
mod session;

use std::time::Duration;

use crate::auth::SessionManager;

/// Superset REST API client.
///
/// # Creating a client
///
/// ```rust,ignore
/// use superset_client::SupersetClient;
/// use superset_config::Credentials;
///
/// let mut client = SupersetClient::builder()
///     .base_url("http://localhost:8088".to_string())
///     .credentials(Credentials::new("admin", "admin"))
///     .build()?;
///
/// let roles = client.list_roles().await?;
/// ```
#[derive(Debug)]
pub struct SupersetClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) timeout: Duration,
}

impl SupersetClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SupersetClientBuilder {
        builder::SupersetClientBuilder::new()
    }

    /// Get the base URL of the Superset server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a login has already produced an access token.
    pub fn is_logged_in(&self) -> bool {
        self.session_manager.is_logged_in()
    }
}
