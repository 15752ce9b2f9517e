// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registration and device pairing routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Extension, Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::User;
use crate::AppState;

/// Public routes (no session required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/users", post(register))
}

/// Routes requiring a session (the pairing portal).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/users/device", post(pair_device))
}

// ─── Registration ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    email: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub email: String,
    /// Portal session for the freshly registered user, used to pair
    /// a device before any device-side session exists.
    pub session_token: String,
}

/// Register a user by email.
///
/// Registration is idempotent: re-registering an existing email leaves
/// the stored profile (including its device binding) untouched and
/// just mints a new portal session.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let status = if state.db.get_user(&req.email).is_some() {
        StatusCode::OK
    } else {
        let user = User {
            email: req.email.clone(),
            device_id: None,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        state.db.upsert_user(&user);
        tracing::info!(email = %req.email, "Registered user");
        StatusCode::CREATED
    };

    let session_token = state.sessions.create_session_token(&req.email)?;

    Ok((
        status,
        Json(RegisterResponse {
            email: req.email,
            session_token,
        }),
    ))
}

// ─── Device Pairing ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct PairDeviceRequest {
    /// The temporary token the device is displaying
    token: String,
}

#[derive(Serialize)]
pub struct PairDeviceResponse {
    pub device_id: String,
}

/// Pair the device behind a temporary token with the session user.
///
/// The token is looked up, not consumed: the device still exchanges it
/// afterwards to obtain its own session. Pairing steals the device
/// from any other account currently bound to it.
async fn pair_device(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<PairDeviceRequest>,
) -> Result<Json<PairDeviceResponse>> {
    let device_id = state.tokens.exchange(&req.token)?;

    state.db.bind_device(&auth.user.email, &device_id);

    tracing::info!(
        email = %auth.user.email,
        device_id = %device_id,
        "Paired device with user"
    );

    Ok(Json(PairDeviceResponse { device_id }))
}
