//! Request and response models for the Superset security API.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod security;

pub use auth::{LoginRequest, LoginResponse};
pub use security::{
    AddPermissionsParams, CreateRoleParams, CreateUserParams, PermissionsPage, parse_id_list,
};
