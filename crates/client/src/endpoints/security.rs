//! Role, user and permission management endpoints.
//!
//! Each function builds the endpoint URL and payload and hands them to
//! [`send_request`]. Response bodies are returned untouched.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::request::{ApiRequest, ApiResponse, send_request};
use crate::error::{ClientError, Result};
use crate::models::{AddPermissionsParams, CreateRoleParams, CreateUserParams, PermissionsPage};

pub const ROLES_PATH: &str = "/api/v1/security/roles/";
/// Role creation is posted without the trailing slash.
pub const ROLES_COLLECTION_PATH: &str = "/api/v1/security/roles";
pub const USERS_PATH: &str = "/api/v1/security/users/";
pub const PERMISSIONS_RESOURCES_PATH: &str = "/api/v1/security/permissions-resources/";

/// Path for attaching permissions to one role.
pub fn role_permissions_path(role_id: i64) -> String {
    format!("{}/{}/permissions", ROLES_COLLECTION_PATH, role_id)
}

fn to_json<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value> {
    serde_json::to_value(payload)
        .map_err(|e| ClientError::InvalidRequest(format!("failed to encode payload: {}", e)))
}

/// List all roles.
pub async fn list_roles(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
) -> Result<ApiResponse> {
    let request = ApiRequest::get(format!("{}{}", base_url, ROLES_PATH));
    send_request(client, auth_token, request, timeout).await
}

/// List all users.
pub async fn list_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
) -> Result<ApiResponse> {
    let request = ApiRequest::get(format!("{}{}", base_url, USERS_PATH));
    send_request(client, auth_token, request, timeout).await
}

/// List one page of permission/view-menu pairs.
pub async fn list_permissions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    page: PermissionsPage,
    timeout: Duration,
) -> Result<ApiResponse> {
    let request = ApiRequest::get(format!("{}{}", base_url, PERMISSIONS_RESOURCES_PATH))
        .query("q", page.to_rison());
    send_request(client, auth_token, request, timeout).await
}

/// Create a new user.
pub async fn create_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &CreateUserParams,
    timeout: Duration,
) -> Result<ApiResponse> {
    let request = ApiRequest::post(format!("{}{}", base_url, USERS_PATH)).json(to_json(params)?);
    send_request(client, auth_token, request, timeout).await
}

/// Create a new role.
pub async fn create_role(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &CreateRoleParams,
    timeout: Duration,
) -> Result<ApiResponse> {
    let request =
        ApiRequest::post(format!("{}{}", base_url, ROLES_COLLECTION_PATH)).json(to_json(params)?);
    send_request(client, auth_token, request, timeout).await
}

/// Attach permission/view-menu ids to a role.
pub async fn add_role_permissions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    role_id: i64,
    params: &AddPermissionsParams,
    timeout: Duration,
) -> Result<ApiResponse> {
    let request = ApiRequest::post(format!("{}{}", base_url, role_permissions_path(role_id)))
        .json(to_json(params)?);
    send_request(client, auth_token, request, timeout).await
}
