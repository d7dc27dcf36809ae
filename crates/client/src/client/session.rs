//! Client-level session helpers.
//!
//! # What this module does NOT handle:
//! - Token storage (handled by [`SessionManager`](crate::auth::SessionManager) in `auth.rs`)
//! - The login HTTP call itself (handled by [`endpoints::login`])
//!
//! # Invariants
//! - [`SupersetClient::auth_token`] requires `&mut self` because it may trigger a login call
//! - Once a token is stored it is never refreshed; there is no expiry handling

use secrecy::ExposeSecret;

use crate::client::SupersetClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl SupersetClient {
    /// Get the access token, logging in first if this client has none yet.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`SupersetClient::login`].
    pub(crate) async fn auth_token(&mut self) -> Result<String> {
        if !self.session_manager.is_logged_in() {
            self.login().await?;
        }

        self.session_manager
            .bearer_token()
            .map(str::to_string)
            .ok_or_else(|| ClientError::InvalidResponse("no access token after login".to_string()))
    }

    /// Log in with the configured username and password and store the token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiError`] if the server rejects the login.
    /// Returns [`ClientError::InvalidResponse`] if the response has no `access_token`.
    pub async fn login(&mut self) -> Result<()> {
        let credentials = self.session_manager.credentials();
        let token = endpoints::login(
            &self.http,
            &self.base_url,
            &credentials.username,
            credentials.password.expose_secret(),
            self.timeout,
        )
        .await?;

        self.session_manager.set_access_token(token);
        Ok(())
    }
}
