//! Payload models for Superset role, user and permission management.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use std::num::ParseIntError;

/// Placeholder written over secrets when a payload is logged.
const REDACTED: &str = "********";

/// Parse a comma-separated list of integer ids such as `"1, 2,3"`.
///
/// Whitespace around each item is ignored. An empty (or blank) string
/// yields an empty list.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(|id| id.trim().parse::<i64>()).collect()
}

fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

/// Body of `POST /api/v1/security/users/`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserParams {
    pub active: bool,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
    pub roles: Vec<i64>,
    pub username: String,
}

impl CreateUserParams {
    /// JSON form of the payload with the password masked, for logging.
    pub fn redacted(&self) -> serde_json::Value {
        serde_json::json!({
            "active": self.active,
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "password": REDACTED,
            "roles": self.roles,
            "username": self.username,
        })
    }
}

/// Body of `POST /api/v1/security/roles`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoleParams {
    pub name: String,
}

/// Body of `POST /api/v1/security/roles/{id}/permissions`.
#[derive(Debug, Clone, Serialize)]
pub struct AddPermissionsParams {
    pub permission_view_menu_ids: Vec<i64>,
}

/// One page of the permissions listing, zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionsPage {
    pub page: u64,
    pub page_size: u64,
}

impl PermissionsPage {
    /// Rison expression Superset expects in the `q` query parameter.
    pub fn to_rison(&self) -> String {
        format!("(page:{},page_size:{})", self.page, self.page_size)
    }
}
