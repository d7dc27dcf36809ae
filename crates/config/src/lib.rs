//! Configuration management for the Superset admin CLI.
//!
//! This crate provides types and loaders for resolving the Superset host,
//! login credentials and request timeout from defaults, `.env` files,
//! environment variables and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials};
