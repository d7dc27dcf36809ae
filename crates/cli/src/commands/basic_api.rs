//! Generic passthrough command.
//!
//! Responsibilities:
//! - Send one authenticated request to `{host}{api_path}` with any method
//! - Pass optional JSON body and header overrides through unchanged
//!
//! Does NOT handle:
//! - Path validation; the path is appended verbatim

use anyhow::{Context, Result};
use superset_client::SupersetClient;
use tracing::info;

use crate::output::log_response;

pub async fn run(
    client: &mut SupersetClient,
    method: &str,
    api_path: &str,
    data: Option<serde_json::Value>,
    headers: &[(String, String)],
) -> Result<()> {
    if let Some(ref body) = data {
        info!("Request payload: {}", body);
    }

    let response = client
        .request(method, api_path, headers, data)
        .await
        .with_context(|| format!("Request to {} failed", api_path))?;

    log_response(&response)
}
