//! Login credentials and the bearer token obtained with them.

use secrecy::{ExposeSecret, SecretString};
use superset_config::Credentials;

/// Holds the login credentials and, once logged in, the access token.
///
/// The token lives only as long as the manager; it is never persisted.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    access_token: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager for the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            access_token: None,
        }
    }

    /// Credentials used for the login call.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the bearer token, if a login has succeeded.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.expose_secret())
    }

    /// Whether a login has already produced a token.
    pub fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }

    /// Store the access token received from the login response.
    pub fn set_access_token(&mut self, token: String) {
        self.access_token = Some(SecretString::from(token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_token() {
        let manager = SessionManager::new(Credentials::new("admin", "admin"));
        assert!(!manager.is_logged_in());
        assert!(manager.bearer_token().is_none());
        assert_eq!(manager.credentials().username, "admin");
    }

    #[test]
    fn test_set_access_token() {
        let mut manager = SessionManager::new(Credentials::new("admin", "admin"));
        manager.set_access_token("eyJ0eXAi.token".to_string());
        assert!(manager.is_logged_in());
        assert_eq!(manager.bearer_token(), Some("eyJ0eXAi.token"));
    }

    #[test]
    fn test_token_and_password_not_exposed_in_debug() {
        let mut manager = SessionManager::new(Credentials::new("admin", "password-45678"));
        manager.set_access_token("session-secret-token-123".to_string());

        let debug_output = format!("{:?}", manager);

        assert!(!debug_output.contains("password-45678"));
        assert!(!debug_output.contains("session-secret-token-123"));
        assert!(debug_output.contains("admin"));
    }
}
