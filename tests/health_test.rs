//! Integration tests for the health probes.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_liveness() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "ok");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_database_probe() {
    let app = helpers::TestApp::with_db().await;

    let response = app.request("GET", "/api/health/db", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
}
