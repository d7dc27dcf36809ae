//! Shared test utilities for superset-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the login endpoint on a mock server.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `SUPERSET_*` variables from the host never reach the child process.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token handed out by [`mount_login`].
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-access-token";

/// Returns a hermetic `superset-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `RUST_LOG` is cleared so the default `info` level applies.
/// - Connection env vars are cleared to ensure no leakage from the host.
pub fn superset_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("superset-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("RUST_LOG")
        .env_remove("SUPERSET_BASE_URL")
        .env_remove("SUPERSET_USERNAME")
        .env_remove("SUPERSET_PASSWORD")
        .env_remove("SUPERSET_TIMEOUT");

    cmd
}

/// Returns a hermetic `superset-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn superset_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = superset_cmd();
    cmd.env("SUPERSET_BASE_URL", base_url);
    cmd
}

/// Mount a successful login that must be called exactly `times` times.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": TEST_TOKEN,
            "refresh_token": "test-refresh-token"
        })))
        .expect(times)
        .mount(server)
        .await;
}
