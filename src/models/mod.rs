//! In-memory feature model for the redlining map data.

pub mod feature;
pub mod geometry;

pub use feature::{Descriptions, Feature, FeatureCollection, Properties};
pub use geometry::{Geometry, MultiPolygon, Point, Polygon, Ring};
