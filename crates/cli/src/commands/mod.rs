//! CLI command implementations.
//!
//! Each command follows the same sequence: log in (lazily, on the client's
//! first call), build the endpoint and payload, send once, log the result.

pub mod basic_api;
pub mod permissions;
pub mod roles;
pub mod users;

use anyhow::{Context, Result};
use superset_client::SupersetClient;
use superset_config::Config;

/// Build a client from the resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<SupersetClient> {
    SupersetClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Superset client")
}
