//! Full-containment bounding box filtering.

use geo::Coord;
use tracing::debug;

use super::retain_matching;
use crate::error::{RedlineError, Result};
use crate::models::{Feature, FeatureCollection, Geometry, Point};

/// Inclusive longitude/latitude box.
///
/// Bounds are used exactly as given; an inverted box simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Coord<f64>,
    max: Coord<f64>,
}

impl BoundingBox {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min: Coord {
                x: min_lon,
                y: min_lat,
            },
            max: Coord {
                x: max_lon,
                y: max_lat,
            },
        }
    }

    /// Build a box from untrusted query values.
    ///
    /// Checks latitudes against [-90, 90], longitudes against [-180, 180],
    /// then ordering. The filter functions never call this themselves.
    pub fn validated(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Result<Self> {
        if ![min_lat, min_lon, max_lat, max_lon]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(RedlineError::validation(
                "Invalid coordinate format. All coordinates must be valid numbers",
            ));
        }
        let lat_ok = |v: f64| (-90.0..=90.0).contains(&v);
        let lon_ok = |v: f64| (-180.0..=180.0).contains(&v);

        if !lat_ok(min_lat) || !lat_ok(max_lat) {
            return Err(RedlineError::validation(
                "Latitude values must be between -90 and 90 degrees",
            ));
        }
        if !lon_ok(min_lon) || !lon_ok(max_lon) {
            return Err(RedlineError::validation(
                "Longitude values must be between -180 and 180 degrees",
            ));
        }
        if min_lat > max_lat {
            return Err(RedlineError::validation(
                "minLat must be less than or equal to maxLat",
            ));
        }
        if min_lon > max_lon {
            return Err(RedlineError::validation(
                "minLong must be less than or equal to maxLong",
            ));
        }

        Ok(Self::new(min_lon, max_lon, min_lat, max_lat))
    }

    pub fn min_lon(&self) -> f64 {
        self.min.x
    }

    pub fn max_lon(&self) -> f64 {
        self.max.x
    }

    pub fn min_lat(&self) -> f64 {
        self.min.y
    }

    pub fn max_lat(&self) -> f64 {
        self.max.y
    }

    /// Inclusive on every edge
    pub fn contains_point(&self, point: &Point) -> bool {
        let c = Coord::from(*point);
        self.min.x <= c.x && c.x <= self.max.x && self.min.y <= c.y && c.y <= self.max.y
    }

    /// True when every point of every ring of every polygon lies in the box
    pub fn contains_geometry(&self, geometry: &Geometry) -> bool {
        geometry.points().all(|p| self.contains_point(p))
    }

    /// Features without geometry are never inside
    pub fn contains_feature(&self, feature: &Feature) -> bool {
        feature
            .geometry()
            .map_or(false, |geometry| self.contains_geometry(geometry))
    }
}

/// Keep the features lying entirely inside the box, in their original order.
pub fn filter_by_bounding_box(
    collection: &FeatureCollection,
    min_lon: f64,
    max_lon: f64,
    min_lat: f64,
    max_lat: f64,
) -> FeatureCollection {
    filter_within(
        collection,
        &BoundingBox::new(min_lon, max_lon, min_lat, max_lat),
    )
}

/// [`filter_by_bounding_box`] for an already constructed box
pub fn filter_within(collection: &FeatureCollection, bbox: &BoundingBox) -> FeatureCollection {
    let result = retain_matching(collection, |feature| bbox.contains_feature(feature));
    debug!(
        "Bounding box lon [{}, {}] lat [{}, {}]: {} of {} features contained",
        bbox.min_lon(),
        bbox.max_lon(),
        bbox.min_lat(),
        bbox.max_lat(),
        result.len(),
        collection.len()
    );
    result
}
