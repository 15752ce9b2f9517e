// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Experience model: a named, bounded collection of tracks, user points
//! and points of interest recorded on a device.

use crate::models::geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A full experience record, replaced wholesale on upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Generated unique id (UUID v4, also used as document ID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Bounding rectangle covering the experience region
    pub bounds: Rect,
    /// Recorded routes
    pub tracks: Vec<Track>,
    /// Waypoints dropped by the user
    pub user_points: Vec<UserPoint>,
    /// Curated points of interest
    pub points_of_interest: Vec<PointOfInterest>,
}

/// Listing entry: id and name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRef {
    pub id: String,
    pub name: String,
}

/// An ordered route within an experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Route geometry, in traversal order
    pub points: Vec<Point>,
    /// One entry per recorded traversal
    pub telemetries: Vec<Telemetry>,
}

/// Checkpoint timestamps from one traversal of a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Telemetry {
    pub id: String,
    /// Checkpoint times (RFC 3339), in traversal order
    pub checkpoints: Vec<String>,
}

/// A waypoint dropped by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPoint {
    pub name: String,
    pub point: Point,
}

/// A curated point of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub point: Point,
    pub category: PoiCategory,
}

/// Point-of-interest categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Food,
    Info,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poi_category_wire_format() {
        let poi = PointOfInterest {
            name: "Shelter".to_string(),
            point: Point::new(45.0, 11.0),
            category: PoiCategory::Warning,
        };

        let json = serde_json::to_value(&poi).unwrap();
        assert_eq!(json["category"], "warning");

        let back: PointOfInterest = serde_json::from_value(json).unwrap();
        assert_eq!(back.category, PoiCategory::Warning);
    }

    #[test]
    fn test_experience_round_trips_through_json() {
        let experience = Experience {
            id: "e1".to_string(),
            name: "Trail".to_string(),
            bounds: Rect::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0)),
            tracks: vec![Track {
                id: "t1".to_string(),
                name: "Loop".to_string(),
                points: vec![Point::new(0.5, 0.5)],
                telemetries: vec![Telemetry {
                    id: "tel1".to_string(),
                    checkpoints: vec!["2026-05-01T10:00:00Z".to_string()],
                }],
            }],
            user_points: vec![],
            points_of_interest: vec![],
        };

        let json = serde_json::to_string(&experience).unwrap();
        let back: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, experience.id);
        assert_eq!(back.tracks[0].telemetries[0].checkpoints.len(), 1);
    }
}
