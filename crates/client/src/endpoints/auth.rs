//! Authentication endpoints.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::endpoints::request::read_response;
use crate::error::{ClientError, Result};
use crate::models::{LoginRequest, LoginResponse};
use superset_config::constants::LOGIN_PROVIDER;

/// Path of the username/password login endpoint.
pub const LOGIN_PATH: &str = "/api/v1/security/login";

/// Login to Superset with username and password.
///
/// Returns the `access_token` from the response body.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
    timeout: Duration,
) -> Result<String> {
    debug!("Logging in to Superset as {}", username);
    info!("Logging in to get access token...");

    let url = format!("{}{}", base_url, LOGIN_PATH);
    let body = LoginRequest {
        username,
        password,
        provider: LOGIN_PROVIDER,
    };

    let response = client
        .post(&url)
        .json(&body)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, &url, timeout))?;
    let response = read_response(response, &url, timeout).await?;

    let login: LoginResponse = serde_json::from_str(&response.body).map_err(|e| {
        ClientError::InvalidResponse(format!("login response is not valid JSON: {}", e))
    })?;

    let token = login.access_token.ok_or_else(|| {
        ClientError::InvalidResponse("Missing access_token in login response".to_string())
    })?;

    info!("Access token obtained successfully!");
    Ok(token)
}
