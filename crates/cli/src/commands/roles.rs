//! Role commands: list roles, create a role, attach permissions to a role.

use anyhow::{Context, Result};
use superset_client::{AddPermissionsParams, CreateRoleParams, SupersetClient};
use tracing::info;

use crate::output::log_response;

pub async fn list(client: &mut SupersetClient) -> Result<()> {
    let response = client.list_roles().await.context("Failed to list roles")?;
    log_response(&response)
}

pub async fn create(client: &mut SupersetClient, name: String) -> Result<()> {
    let params = CreateRoleParams { name };
    info!("Creating role with payload: {}", serde_json::json!({ "name": params.name }));

    let response = client
        .create_role(&params)
        .await
        .with_context(|| format!("Failed to create role '{}'", params.name))?;
    log_response(&response)
}

pub async fn add_permissions(
    client: &mut SupersetClient,
    role_id: i64,
    permission_view_menu_ids: Vec<i64>,
) -> Result<()> {
    let params = AddPermissionsParams {
        permission_view_menu_ids,
    };
    info!(
        "Adding permissions with payload: {}",
        serde_json::json!({ "permission_view_menu_ids": params.permission_view_menu_ids })
    );

    let response = client
        .add_role_permissions(role_id, &params)
        .await
        .with_context(|| format!("Failed to add permissions to role {}", role_id))?;
    log_response(&response)
}
