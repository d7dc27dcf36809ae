//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::path::PathBuf;
use std::time::Duration;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use superset_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use superset_client::SupersetClient;
use superset_config::Credentials;
use wiremock::matchers::{method, path};

/// Token returned by `fixtures/auth/login_success.json`.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test-access-token";

/// Load a JSON fixture relative to `fixtures/`.
pub fn load_fixture(name: &str) -> serde_json::Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("fixture {} is not valid JSON: {}", path.display(), e))
}

/// Mount a successful login that must be called exactly `times` times.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Client pointed at the mock server with admin/admin credentials.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SupersetClient {
    SupersetClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("admin", "admin"))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}
