//! Schedule endpoint tests.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_list_schedules() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("schedules/list_schedules.json");

    Mock::given(method("GET"))
        .and(path("/api/v0/projects/home/packages/faa/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let schedules = client.list_schedules("home", "faa", None).await.unwrap();

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].resource, "flights.malloy");
    assert_eq!(schedules[0].action, "refresh");
    assert_eq!(schedules[0].last_run_status, "ok");
    assert!(schedules[0].last_run_time > 0.0);
}

#[tokio::test]
async fn test_list_schedules_missing_field_is_schema_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/projects/home/packages/faa/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "resource": "flights.malloy",
            "schedule": "0 * * * *",
            "action": "refresh",
            "connection": "duckdb"
        }])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.list_schedules("home", "faa", None).await.unwrap_err();
    match err {
        ClientError::InvalidResponse(message) => {
            assert!(message.contains("lastRunTime"), "message was: {message}");
        }
        other => panic!("expected InvalidResponse, got {:?}", other),
    }
}
