//! Geographic value objects shared by experiences and feeds.

use serde::{Deserialize, Serialize};

/// A geographic point (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An axis-aligned bounding rectangle given by its north-west and
/// south-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub north_west: Point,
    pub south_east: Point,
}

impl Rect {
    pub fn new(north_west: Point, south_east: Point) -> Self {
        Self {
            north_west,
            south_east,
        }
    }
}
