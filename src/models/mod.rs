// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod experience;
pub mod feed;
pub mod geo;
pub mod sync;
pub mod user;

pub use experience::{Experience, ExperienceRef, PointOfInterest, Telemetry, Track, UserPoint};
pub use feed::{EmergencyContact, WeatherForecast};
pub use geo::{Point, Rect};
pub use sync::{SyncInputData, SyncOutputData, TelemetryUpload};
pub use user::{TempToken, User};
