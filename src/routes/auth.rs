// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device authentication routes: temporary token issue and exchange.

use axum::{extract::State, routing::post, Json, Router};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/device", post(issue_device_token))
        .route("/auth/exchange", post(exchange_token))
}

/// Request body for a device starting the handshake.
#[derive(Deserialize, Validate)]
pub struct DeviceAuthRequest {
    #[validate(length(min = 1, max = 128))]
    device_id: String,
}

/// Freshly issued temporary token.
#[derive(Serialize)]
pub struct DeviceAuthResponse {
    pub token: String,
    pub expires_at: String,
}

/// Issue a temporary token for a device.
///
/// Replaces any previous token for the device and clears a stale
/// user binding left over from an earlier pairing.
async fn issue_device_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeviceAuthRequest>,
) -> Result<Json<DeviceAuthResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let token = state.tokens.issue(&req.device_id).await?;
    let expires_at =
        (token.issued_at + state.tokens.ttl()).to_rfc3339_opts(SecondsFormat::Secs, true);

    Ok(Json(DeviceAuthResponse {
        token: token.token,
        expires_at,
    }))
}

/// Request body for exchanging a temporary token.
#[derive(Deserialize)]
pub struct ExchangeRequest {
    token: String,
}

/// Session credential handed back to the device.
#[derive(Serialize)]
pub struct ExchangeResponse {
    pub session_token: String,
}

/// Exchange a temporary token for a session token.
///
/// The temporary token resolves to its device; the device must have
/// been paired with a user for the exchange to succeed. A consumed,
/// expired, or unknown token and an unpaired device all come back as
/// 401 so a probing client learns nothing about which case it hit.
async fn exchange_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExchangeRequest>,
) -> Result<Json<ExchangeResponse>> {
    let device_id = match state.tokens.exchange(&req.token) {
        Ok(device_id) => device_id,
        Err(AppError::NotFound(_)) => return Err(AppError::InvalidToken),
        Err(e) => return Err(e),
    };

    let user = state
        .db
        .find_user_by_device(&device_id)
        .ok_or(AppError::InvalidToken)?;

    let session_token = state.sessions.create_session_token(&user.email)?;

    tracing::info!(device_id = %device_id, email = %user.email, "Exchanged temporary token for session");

    Ok(Json(ExchangeResponse { session_token }))
}
