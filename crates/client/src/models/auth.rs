//! Authentication models for the Superset login API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/security/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub provider: &'a str,
}

/// Login response. Other fields (such as `refresh_token`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}
