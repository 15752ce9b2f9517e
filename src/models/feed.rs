// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Global feed records pushed to devices during sync. These carry no
//! owner; every user receives the full feed.

use crate::models::geo::Rect;
use serde::{Deserialize, Serialize};

/// One day of forecast data for a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// Forecast date (YYYY-MM-DD)
    pub date: String,
    pub condition: WeatherCondition,
    /// Expected temperature in degrees Celsius
    pub temperature: f64,
    /// Region the forecast applies to
    pub area: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

/// An emergency contact applicable to a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
    /// Region the contact is responsible for
    pub area: Rect,
}
