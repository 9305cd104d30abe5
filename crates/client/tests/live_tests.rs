//! Live server tests against a real Malloy Publisher instance.
//!
//! These tests require a publisher running at `MALLOY_BASE_URL` (default
//! http://localhost:4000) with the sample `home` project loaded.
//!
//! Run with: cargo test --test live_tests -- --ignored

use malloy_client::{MalloyClient, QueryParams};

fn create_test_client() -> MalloyClient {
    dotenvy::dotenv().ok();
    let base_url = std::env::var("MALLOY_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:4000".to_string());

    MalloyClient::builder()
        .base_url(base_url)
        .build()
        .expect("Failed to create client")
}

#[tokio::test]
#[ignore = "requires live Malloy Publisher server"]
async fn test_live_list_projects() {
    let client = create_test_client();
    let projects = client.list_projects().await.expect("Failed to list projects");

    assert!(!projects.is_empty(), "Should have at least one project");
    assert!(
        projects.iter().any(|p| p.name == "home"),
        "Should have 'home' project"
    );
}

#[tokio::test]
#[ignore = "requires live Malloy Publisher server"]
async fn test_live_package_walk() {
    let client = create_test_client();

    let packages = client.list_packages("home").await.expect("Failed to list packages");
    assert!(!packages.is_empty(), "Should have at least one package");

    let package_name = &packages[0].name;
    let models = client
        .list_models("home", package_name, None)
        .await
        .expect("Failed to list models");
    assert!(models.iter().all(|m| &m.package_name == package_name));
}

#[tokio::test]
#[ignore = "requires live Malloy Publisher server"]
async fn test_live_execute_named_query() {
    let client = create_test_client();

    let params = QueryParams {
        project_name: "home".to_string(),
        package_name: "faa".to_string(),
        path: "flights.malloy".to_string(),
        source_name: Some("flights".to_string()),
        query_name: Some("top_carriers".to_string()),
        ..QueryParams::default()
    };

    let result = client.execute_query(&params).await.expect("Query failed");
    assert!(!result.query_result.is_empty());
    assert!(!result.model_def.is_empty());
}
