// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use trailsync::config::Config;
use trailsync::db::Store;
use trailsync::models::feed::{EmergencyContact, WeatherCondition, WeatherForecast};
use trailsync::models::geo::{Point, Rect};
use trailsync::routes::create_router;
use trailsync::services::{Clock, FeedService, SessionService, SyncService, TokenService};
use trailsync::AppState;

/// Create a test app with an in-memory store and fixed feed data.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_clock(Clock::system())
}

/// Create a test app whose token service runs on the given clock.
#[allow(dead_code)]
pub fn create_test_app_with_clock(clock: Clock) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = Store::new();

    let area = Rect::new(Point::new(46.5, 10.5), Point::new(45.0, 12.5));
    let feeds = FeedService::from_parts(
        vec![WeatherForecast {
            date: "2026-08-04".to_string(),
            condition: WeatherCondition::Sunny,
            temperature: 24.0,
            area,
        }],
        vec![EmergencyContact {
            name: "Mountain Rescue".to_string(),
            number: "118".to_string(),
            area,
        }],
    );

    let tokens = TokenService::new(db.clone(), clock, config.temp_token_ttl_minutes);
    let sessions = SessionService::new(db.clone(), config.jwt_signing_key.clone());
    let sync = SyncService::new(feeds);

    let state = Arc::new(AppState {
        config,
        db,
        tokens,
        sessions,
        sync,
    });

    (create_router(state.clone()), state)
}

/// Fire one request at the router and return status plus parsed body.
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    session_token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = session_token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register a user through the API and return their session token.
#[allow(dead_code)]
pub async fn register_user(app: &axum::Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/users",
        None,
        Some(serde_json::json!({ "email": email })),
    )
    .await;
    assert!(
        status == StatusCode::CREATED || status == StatusCode::OK,
        "registration failed: {status}"
    );
    body["session_token"].as_str().unwrap().to_string()
}

/// Create a minimal experience for a user and return its id.
#[allow(dead_code)]
pub async fn create_experience(app: &axum::Router, session_token: &str, name: &str) -> String {
    let body = serde_json::json!({
        "name": name,
        "bounds": {
            "north_west": { "latitude": 1.0, "longitude": 0.0 },
            "south_east": { "latitude": 0.0, "longitude": 1.0 }
        },
        "tracks": [{
            "id": "track-1",
            "name": "Main loop",
            "points": [
                { "latitude": 0.2, "longitude": 0.2 },
                { "latitude": 0.8, "longitude": 0.8 }
            ],
            "telemetries": []
        }]
    });

    let (status, body) = send(app, "POST", "/experiences", Some(session_token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}
