//! Integration tests for registration and profile lookup.
//!
//! These tests require a PostgreSQL instance matching `config/test.toml`.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_and_fetch_profile() {
    let app = helpers::TestApp::with_db().await;
    let token = app.token_for("+911234567890");

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Asha Verma",
                "scholar_number": "21U01234",
                "gender": "female",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.get("phone").unwrap().as_str().unwrap(),
        "+911234567890"
    );
    assert_eq!(
        response.body.get("gender").unwrap().as_str().unwrap(),
        "female"
    );

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("name").unwrap().as_str().unwrap(),
        "Asha Verma"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_me_before_registration() {
    let app = helpers::TestApp::with_db().await;
    let token = app.token_for("+911111111111");

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_duplicate_phone_registration_conflicts() {
    let app = helpers::TestApp::with_db().await;
    let token = app.token_for("+912222222222");

    let body = serde_json::json!({
        "name": "Ravi Kumar",
        "scholar_number": "21U05678",
        "gender": "male",
    });

    let first = app
        .request("POST", "/api/users", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("POST", "/api/users", Some(body), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.body.get("error").unwrap().as_str().unwrap(),
        "CONFLICT"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_duplicate_scholar_number_conflicts() {
    let app = helpers::TestApp::with_db().await;

    let first = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "First",
                "scholar_number": "21U09999",
                "gender": "male",
            })),
            Some(&app.token_for("+913333333333")),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Second",
                "scholar_number": "21U09999",
                "gender": "male",
            })),
            Some(&app.token_for("+914444444444")),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.body.get("error").unwrap().as_str().unwrap(),
        "CONFLICT"
    );
}
