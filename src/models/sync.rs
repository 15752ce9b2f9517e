// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transient payloads for the sync exchange. Neither side of the
//! exchange is persisted as its own entity: inputs are merged into the
//! experience they reference, and the output snapshot is assembled
//! fresh per request.

use crate::models::experience::{Experience, Telemetry, UserPoint};
use crate::models::feed::{EmergencyContact, WeatherForecast};
use serde::{Deserialize, Serialize};

/// Incremental data submitted by a device for one experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncInputData {
    pub experience_id: String,
    #[serde(default)]
    pub user_points: Vec<UserPoint>,
    #[serde(default)]
    pub telemetries: Vec<TelemetryUpload>,
}

/// A telemetry record tagged with the track it was recorded on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryUpload {
    pub track_id: String,
    pub telemetry: Telemetry,
}

/// The snapshot returned to the device after a sync exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncOutputData {
    pub experiences: Vec<Experience>,
    pub weather: Vec<WeatherForecast>,
    pub emergency_contacts: Vec<EmergencyContact>,
}
