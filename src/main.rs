// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trailsync API Server
//!
//! Persists and synchronizes field-recorded experiences per user, and
//! handles the device handshake that turns a short-lived device token
//! into a durable session.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trailsync::{
    config::Config,
    db::Store,
    services::{Clock, FeedService, SessionService, SyncService, TokenService},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Trailsync API");

    // Initialize the store
    let db = Store::new();

    // Load the global feeds served to every device
    let feeds = FeedService::load_from_files(&config.weather_data_path, &config.emergency_data_path)
        .expect("Failed to load feed data");

    let tokens = TokenService::new(db.clone(), Clock::system(), config.temp_token_ttl_minutes);
    let sessions = SessionService::new(db.clone(), config.jwt_signing_key.clone());
    let sync = SyncService::new(feeds);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        tokens,
        sessions,
        sync,
    });

    // Build router
    let app = trailsync::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trailsync=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
