//! REST API endpoint implementations.

mod auth;
mod request;
mod security;

pub use auth::{LOGIN_PATH, login};
pub use request::{ApiRequest, ApiResponse, send_request};
pub use security::{
    PERMISSIONS_RESOURCES_PATH, ROLES_COLLECTION_PATH, ROLES_PATH, USERS_PATH,
    add_role_permissions, create_role, create_user, list_permissions, list_roles, list_users,
    role_permissions_path,
};
