// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Experience CRUD and track/telemetry lookup routes.
//!
//! Every handler scopes the store to the authenticated user first, so
//! a forged id can only ever produce a 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{
    Experience, ExperienceRef, PointOfInterest, Rect, Telemetry, Track, UserPoint,
};
use crate::AppState;

/// Experience routes (require authentication).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/experiences", get(list_experiences).post(create_experience))
        .route(
            "/experiences/{id}",
            get(get_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
        .route(
            "/experiences/{id}/tracks/{track_id}",
            get(get_track),
        )
        .route(
            "/experiences/{id}/tracks/{track_id}/telemetries",
            get(list_telemetries),
        )
        .route(
            "/experiences/{id}/tracks/{track_id}/telemetries/{telemetry_id}",
            get(get_telemetry),
        )
}

/// Body shared by create and update: an experience minus its id.
#[derive(Deserialize, Validate)]
pub struct ExperienceBody {
    #[validate(length(min = 1, max = 256))]
    name: String,
    bounds: Rect,
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    user_points: Vec<UserPoint>,
    #[serde(default)]
    points_of_interest: Vec<PointOfInterest>,
}

impl ExperienceBody {
    fn into_experience(self, id: String) -> Experience {
        Experience {
            id,
            name: self.name,
            bounds: self.bounds,
            tracks: self.tracks,
            user_points: self.user_points,
            points_of_interest: self.points_of_interest,
        }
    }
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// List id and name of the user's experiences.
async fn list_experiences(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<ExperienceRef>>> {
    let scoped = state.sessions.scope(&auth.user);
    Ok(Json(scoped.list_experiences()))
}

/// Get one experience in full.
async fn get_experience(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Experience>> {
    let scoped = state.sessions.scope(&auth.user);
    Ok(Json(scoped.get_experience(&id)?))
}

/// Create an experience with a server-generated id.
async fn create_experience(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<ExperienceBody>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = Uuid::new_v4().to_string();
    let scoped = state.sessions.scope(&auth.user);
    scoped.put_experience(body.into_experience(id.clone()))?;

    tracing::info!(email = %auth.user.email, experience_id = %id, "Created experience");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Replace an experience wholesale.
async fn update_experience(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<ExperienceBody>,
) -> Result<StatusCode> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let scoped = state.sessions.scope(&auth.user);
    scoped.put_experience(body.into_experience(id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an experience. Absent and foreign ids are a no-op.
async fn delete_experience(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let scoped = state.sessions.scope(&auth.user);
    scoped.delete_experience(&id);

    Ok(StatusCode::NO_CONTENT)
}

/// Get one track of an owned experience.
async fn get_track(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path((id, track_id)): Path<(String, String)>,
) -> Result<Json<Track>> {
    let scoped = state.sessions.scope(&auth.user);
    Ok(Json(scoped.get_track(&id, &track_id)?))
}

/// List the telemetries recorded for a track.
async fn list_telemetries(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path((id, track_id)): Path<(String, String)>,
) -> Result<Json<Vec<Telemetry>>> {
    let scoped = state.sessions.scope(&auth.user);
    Ok(Json(scoped.get_track(&id, &track_id)?.telemetries))
}

/// Get one telemetry record.
async fn get_telemetry(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path((id, track_id, telemetry_id)): Path<(String, String, String)>,
) -> Result<Json<Telemetry>> {
    let scoped = state.sessions.scope(&auth.user);
    Ok(Json(scoped.get_telemetry(&id, &track_id, &telemetry_id)?))
}
