//! Response printing.
//!
//! Successful response bodies are decoded as JSON and logged pretty-printed
//! with two-space indentation. A body that is not JSON is an error.

use anyhow::{Context, Result};
use superset_client::ApiResponse;
use tracing::info;

/// Render a response body as indented JSON.
pub fn render_response(response: &ApiResponse) -> Result<String> {
    let value = response.json()?;
    serde_json::to_string_pretty(&value).context("Failed to serialize response body")
}

/// Log a successful response as `API result: {json}`.
pub fn log_response(response: &ApiResponse) -> Result<()> {
    let rendered = render_response(response)?;
    info!("API result: {}", rendered);
    Ok(())
}
