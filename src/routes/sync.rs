// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sync exchange routes.

use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{SyncInputData, SyncOutputData};
use crate::AppState;

/// Sync routes (require authentication).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/sync", get(pull_sync).post(full_sync))
}

/// Download-only sync: assemble a fresh snapshot for the device.
async fn pull_sync(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<SyncOutputData>> {
    let scoped = state.sessions.scope(&auth.user);
    Ok(Json(state.sync.pull(&scoped)))
}

/// Full sync exchange: merge the submitted inputs, then respond with a
/// snapshot that already reflects them.
async fn full_sync(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(inputs): Json<Vec<SyncInputData>>,
) -> Result<Json<SyncOutputData>> {
    let scoped = state.sessions.scope(&auth.user);

    state.sync.push(&scoped, &inputs)?;
    Ok(Json(state.sync.pull(&scoped)))
}
