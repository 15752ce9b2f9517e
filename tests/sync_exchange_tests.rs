// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sync exchange tests over the HTTP surface: the snapshot a device
//! pulls must reflect everything it just pushed, and nothing belonging
//! to anyone else.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{create_experience, create_test_app, register_user, send};

fn push_body(experience_id: &str) -> serde_json::Value {
    json!([{
        "experience_id": experience_id,
        "user_points": [
            { "name": "Camp", "point": { "latitude": 0.5, "longitude": 0.5 } }
        ],
        "telemetries": [{
            "track_id": "track-1",
            "telemetry": {
                "id": "tel-1",
                "checkpoints": ["2026-08-04T10:00:00Z", "2026-08-04T11:30:00Z"]
            }
        }]
    }])
}

#[tokio::test]
async fn test_push_then_pull_returns_submitted_data() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    let id = create_experience(&app, &alice, "Trail").await;

    let (status, body) = send(&app, "POST", "/sync", Some(&alice), Some(push_body(&id))).await;
    assert_eq!(status, StatusCode::OK);

    // The response snapshot already reflects the merge
    let experiences = body["experiences"].as_array().unwrap();
    assert_eq!(experiences.len(), 1);
    assert_eq!(experiences[0]["user_points"][0]["name"], "Camp");
    assert_eq!(
        experiences[0]["tracks"][0]["telemetries"][0]["id"],
        "tel-1"
    );
    assert_eq!(
        experiences[0]["tracks"][0]["telemetries"][0]["checkpoints"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_pull_is_read_only() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    let id = create_experience(&app, &alice, "Trail").await;
    send(&app, "POST", "/sync", Some(&alice), Some(push_body(&id))).await;

    // Two pulls in a row return the same snapshot
    let (_, first) = send(&app, "GET", "/sync", Some(&alice), None).await;
    let (_, second) = send(&app, "GET", "/sync", Some(&alice), None).await;
    assert_eq!(first, second);
    assert_eq!(
        first["experiences"][0]["user_points"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_retried_push_duplicates_records() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    let id = create_experience(&app, &alice, "Trail").await;

    send(&app, "POST", "/sync", Some(&alice), Some(push_body(&id))).await;
    let (_, body) = send(&app, "POST", "/sync", Some(&alice), Some(push_body(&id))).await;

    // Append-only merge: the retry is not de-duplicated
    let experience = &body["experiences"][0];
    assert_eq!(experience["user_points"].as_array().unwrap().len(), 2);
    assert_eq!(
        experience["tracks"][0]["telemetries"].as_array().unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_push_to_foreign_experience_is_not_found() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    let bob = register_user(&app, "bob@example.com").await;
    let id = create_experience(&app, &alice, "Trail").await;

    let (status, _) = send(&app, "POST", "/sync", Some(&bob), Some(push_body(&id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Alice's experience is untouched
    let (_, body) = send(&app, "GET", "/sync", Some(&alice), None).await;
    assert_eq!(
        body["experiences"][0]["user_points"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[tokio::test]
async fn test_snapshot_scopes_experiences_but_not_feeds() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    let bob = register_user(&app, "bob@example.com").await;
    create_experience(&app, &alice, "Alice's trail").await;

    let (_, body) = send(&app, "GET", "/sync", Some(&bob), None).await;

    // Bob sees no experiences but the full global feeds
    assert_eq!(body["experiences"].as_array().unwrap().len(), 0);
    assert_eq!(body["weather"].as_array().unwrap().len(), 1);
    assert_eq!(body["emergency_contacts"].as_array().unwrap().len(), 1);
    assert_eq!(body["emergency_contacts"][0]["name"], "Mountain Rescue");
}

#[tokio::test]
async fn test_push_with_unknown_track_merges_nothing() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    let id = create_experience(&app, &alice, "Trail").await;

    let mut body = push_body(&id);
    body[0]["telemetries"][0]["track_id"] = json!("no-such-track");

    let (status, _) = send(&app, "POST", "/sync", Some(&alice), Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, snapshot) = send(&app, "GET", "/sync", Some(&alice), None).await;
    let experience = &snapshot["experiences"][0];
    assert_eq!(experience["user_points"].as_array().unwrap().len(), 0);
    assert_eq!(
        experience["tracks"][0]["telemetries"].as_array().unwrap().len(),
        0
    );
}

#[tokio::test]
async fn test_empty_push_is_a_plain_pull() {
    let (app, _) = create_test_app();

    let alice = register_user(&app, "alice@example.com").await;
    create_experience(&app, &alice, "Trail").await;

    let (status, body) = send(&app, "POST", "/sync", Some(&alice), Some(json!([]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["experiences"].as_array().unwrap().len(), 1);
}
