//! JSON encoding and decoding of feature collections.
//!
//! The map client renders whatever this module emits, so the shape is fixed:
//! `{"type", "features": [{"type", "geometry": {"coordinates"}, "properties"}]}`
//! with coordinates nested polygon -> ring -> `[lon, lat]`. Decoding goes
//! straight into the model structs; anything that does not fit is rejected.

use tracing::debug;

use crate::error::Result;
use crate::models::FeatureCollection;

/// Serialize a collection to compact JSON text
pub fn encode(collection: &FeatureCollection) -> Result<String> {
    Ok(serde_json::to_string(collection)?)
}

/// Serialize a collection to indented JSON text
pub fn encode_pretty(collection: &FeatureCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Parse JSON text into a collection.
///
/// Missing top-level fields are tolerated, so `{}` decodes to an empty
/// collection. Wrong nesting depth, a point that is not exactly two numbers,
/// or malformed JSON yields [`RedlineError::Parse`](crate::RedlineError::Parse).
pub fn decode(json: &str) -> Result<FeatureCollection> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    debug!("Decoded collection with {} features", collection.len());
    Ok(collection)
}
