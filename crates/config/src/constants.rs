//! Centralized constants for the Superset admin workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Superset host URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8088";

/// Default username for the login call.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default password for the login call.
pub const DEFAULT_PASSWORD: &str = "admin";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Security API
// =============================================================================

/// Authentication provider sent with every login request.
pub const LOGIN_PROVIDER: &str = "db";

/// Default page size for the permissions listing.
pub const DEFAULT_PERMISSIONS_PAGE_SIZE: u64 = 25;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "SUPERSET_BASE_URL";
pub const ENV_USERNAME: &str = "SUPERSET_USERNAME";
pub const ENV_PASSWORD: &str = "SUPERSET_PASSWORD";
pub const ENV_TIMEOUT: &str = "SUPERSET_TIMEOUT";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
