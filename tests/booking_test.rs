//! Integration tests for the booking endpoint.
//!
//! These tests require a PostgreSQL instance matching `config/test.toml`.

mod helpers;

use std::time::Duration;

use http::StatusCode;

use booking_core::events::{ChangeOp, ChangeTable};

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_booking_success_increments_counter() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(0, 0).await;
    app.create_test_user("+916000000001", "Asha", "21U10001").await;
    let token = app.token_for("+916000000001");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "time_slot_id": slot,
                "club": "xploit",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body.get("success").unwrap().as_bool().unwrap());
    let booking = response.body.get("booking").unwrap();
    assert_eq!(booking.get("club").unwrap().as_str().unwrap(), "xploit");

    assert_eq!(app.slot_counters(slot).await, (1, 0));
    assert_eq!(app.booking_rows(slot).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_full_slot_rejected_without_side_effects() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(4, 0).await;
    app.create_test_user("+916000000002", "Ravi", "21U10002").await;
    let token = app.token_for("+916000000002");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "time_slot_id": slot,
                "club": "xploit",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "SLOT_FULL"
    );

    // The rejection left no booking row and no counter change.
    assert_eq!(app.slot_counters(slot).await, (4, 0));
    assert_eq!(app.booking_rows(slot).await, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_other_club_pool_still_open_when_one_is_full() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(4, 0).await;
    app.create_test_user("+916000000003", "Meera", "21U10003").await;
    let token = app.token_for("+916000000003");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "time_slot_id": slot,
                "club": "ecell",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.slot_counters(slot).await, (4, 1));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_duplicate_booking_rejected() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(0, 0).await;
    app.create_test_user("+916000000004", "Dev", "21U10004").await;
    let token = app.token_for("+916000000004");

    let first = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({"time_slot_id": slot, "club": "xploit"})),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Default policy is one booking per slot, regardless of club.
    let second = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({"time_slot_id": slot, "club": "ecell"})),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.body.get("error").unwrap().as_str().unwrap(),
        "CONFLICT"
    );

    // The rejected attempt rolled back its counter increment.
    assert_eq!(app.slot_counters(slot).await, (1, 0));
    assert_eq!(app.booking_rows(slot).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_unregistered_phone_cannot_book() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(0, 0).await;
    let token = app.token_for("+916000000005");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({"time_slot_id": slot, "club": "xploit"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.slot_counters(slot).await, (0, 0));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_unknown_slot_cannot_be_booked() {
    let app = helpers::TestApp::with_db().await;
    app.create_test_user("+916000000006", "Nia", "21U10006").await;
    let token = app.token_for("+916000000006");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "time_slot_id": uuid::Uuid::new_v4(),
                "club": "xploit",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_committed_booking_publishes_change_events() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(0, 0).await;
    app.create_test_user("+916000000007", "Zed", "21U10007").await;
    let token = app.token_for("+916000000007");

    let mut feed_rx = app.state.change_feed.subscribe();

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({"time_slot_id": slot, "club": "xploit"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Events are published after commit, before the response returns.
    let first = tokio::time::timeout(Duration::from_secs(1), feed_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.table, ChangeTable::TimeSlots);
    assert_eq!(first.op, ChangeOp::Update);
    assert_eq!(first.row_id, Some(slot));

    let second = tokio::time::timeout(Duration::from_secs(1), feed_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.table, ChangeTable::Bookings);
    assert_eq!(second.op, ChangeOp::Insert);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_rejected_booking_publishes_nothing() {
    let app = helpers::TestApp::with_db().await;
    let slot = app.create_test_slot(4, 0).await;
    app.create_test_user("+916000000008", "Kai", "21U10008").await;
    let token = app.token_for("+916000000008");

    let mut feed_rx = app.state.change_feed.subscribe();

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({"time_slot_id": slot, "club": "xploit"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert!(
        tokio::time::timeout(Duration::from_millis(100), feed_rx.recv())
            .await
            .is_err()
    );
}
