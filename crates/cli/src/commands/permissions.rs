//! Permission listing command.

use anyhow::{Context, Result};
use superset_client::{PermissionsPage, SupersetClient};

use crate::output::log_response;

pub async fn list(client: &mut SupersetClient, page: u64, page_size: u64) -> Result<()> {
    let response = client
        .list_permissions(PermissionsPage { page, page_size })
        .await
        .context("Failed to list permissions")?;
    log_response(&response)
}
