//! User commands: list users, create a user.
//!
//! Invariants:
//! - The create-user payload is logged with the password masked

use anyhow::{Context, Result};
use secrecy::SecretString;
use superset_client::{CreateUserParams, SupersetClient};
use tracing::info;

use crate::output::log_response;

/// Flags of the `create-user` command.
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    pub roles: Vec<i64>,
    pub email: String,
    pub password: String,
}

pub async fn list(client: &mut SupersetClient) -> Result<()> {
    let response = client.list_users().await.context("Failed to list users")?;
    log_response(&response)
}

pub async fn create(client: &mut SupersetClient, user: NewUser) -> Result<()> {
    let params = CreateUserParams {
        active: user.active,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        password: SecretString::from(user.password),
        roles: user.roles,
        username: user.username,
    };
    info!("Creating user with payload: {}", params.redacted());

    let response = client
        .create_user(&params)
        .await
        .with_context(|| format!("Failed to create user '{}'", params.username))?;
    log_response(&response)
}
