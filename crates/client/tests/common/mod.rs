//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Malloy client against
//! wiremock servers.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

// Re-export test utilities from malloy-client
#[allow(unused_imports)]
pub use malloy_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use malloy_client::{ClientError, MalloyClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> MalloyClient {
    MalloyClient::builder()
        .base_url(base_url)
        .build()
        .expect("failed to build test client")
}
