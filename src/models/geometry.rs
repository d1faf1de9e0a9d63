//! Multipolygon geometry with a fixed four-level coordinate nesting.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A single `(longitude, latitude)` position.
///
/// Encoded as a two-element JSON array `[lon, lat]`; any other arity is
/// rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Point {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.lon, point.lat]
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Coord {
            x: point.lon,
            y: point.lat,
        }
    }
}

/// Ordered points of one ring. Rings are kept exactly as stored; no closure
/// check is made.
pub type Ring = Vec<Point>;

/// Outer ring followed by any holes.
pub type Polygon = Vec<Ring>;

/// Ordered polygons of a feature.
pub type MultiPolygon = Vec<Polygon>;

/// Geometry of a single feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geometry discriminator (e.g. "MultiPolygon"), omitted when absent
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// multipolygon -> polygon -> ring -> point
    pub coordinates: MultiPolygon,
}

impl Geometry {
    pub fn new(coordinates: MultiPolygon) -> Self {
        Self {
            kind: None,
            coordinates,
        }
    }

    /// Create a geometry tagged as a "MultiPolygon"
    pub fn multi_polygon(coordinates: MultiPolygon) -> Self {
        Self {
            kind: Some("MultiPolygon".to_string()),
            coordinates,
        }
    }

    pub fn coordinates(&self) -> &MultiPolygon {
        &self.coordinates
    }

    /// Iterate over every point of every ring of every polygon, in storage order
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.coordinates.iter().flatten().flatten()
    }

    /// Total number of stored points
    pub fn point_count(&self) -> usize {
        self.coordinates
            .iter()
            .flatten()
            .map(|ring| ring.len())
            .sum()
    }
}
