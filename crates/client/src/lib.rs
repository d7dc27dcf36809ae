//! Superset REST API client.
//!
//! This crate provides a typed client for the security administration surface
//! of the Apache Superset REST API. It logs in with username/password, keeps
//! the returned bearer token for the lifetime of the client, and issues the
//! follow-on role, user and permission requests.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use auth::SessionManager;
pub use client::SupersetClient;
pub use client::builder::SupersetClientBuilder;
pub use endpoints::{ApiRequest, ApiResponse};
pub use error::{ClientError, Result};
pub use models::{
    AddPermissionsParams, CreateRoleParams, CreateUserParams, LoginRequest, LoginResponse,
    PermissionsPage, parse_id_list,
};
