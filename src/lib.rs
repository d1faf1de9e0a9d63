//! Redline - geospatial filtering over historical redlining map data
//!
//! Loads a collection of neighborhood multipolygons once, then answers
//! bounding box (full containment) and keyword queries against it, encoding
//! results in the same JSON shape the map client renders.

pub mod adapter;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod pins;

pub use error::{RedlineError, Result};
pub use filter::{filter_by_bounding_box, filter_by_keyword, BoundingBox};
pub use loader::load;
pub use models::{Feature, FeatureCollection, Geometry, Point, Properties};
