// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather and emergency-contact feed loading.
//!
//! Both feeds are global read-only collections, loaded whole from JSON
//! data files at startup and handed to every sync pull unfiltered.

use crate::models::{EmergencyContact, WeatherForecast};
use std::fs;
use std::path::Path;

/// Service holding the loaded feed collections.
#[derive(Default, Clone, Debug)]
pub struct FeedService {
    weather: Vec<WeatherForecast>,
    emergency_contacts: Vec<EmergencyContact>,
}

impl FeedService {
    /// Load both feeds from JSON files.
    pub fn load_from_files<P: AsRef<Path>>(
        weather_path: P,
        emergency_path: P,
    ) -> Result<Self, FeedError> {
        let weather = Self::load_json(weather_path.as_ref())?;
        let emergency_contacts = Self::load_json(emergency_path.as_ref())?;

        tracing::info!(
            forecasts = weather.len(),
            contacts = emergency_contacts.len(),
            "Loaded feed data"
        );

        Ok(Self {
            weather,
            emergency_contacts,
        })
    }

    /// Build a service from already-loaded collections (tests).
    pub fn from_parts(
        weather: Vec<WeatherForecast>,
        emergency_contacts: Vec<EmergencyContact>,
    ) -> Self {
        Self {
            weather,
            emergency_contacts,
        }
    }

    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, FeedError> {
        let json_data =
            fs::read_to_string(path).map_err(|e| FeedError::IoError(e.to_string()))?;
        serde_json::from_str(&json_data).map_err(|e| FeedError::ParseError(e.to_string()))
    }

    /// All loaded weather forecasts.
    pub fn weather(&self) -> &[WeatherForecast] {
        &self.weather
    }

    /// All loaded emergency contacts.
    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.emergency_contacts
    }
}

/// Errors from feed loading.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse feed JSON: {0}")]
    ParseError(String),
}
