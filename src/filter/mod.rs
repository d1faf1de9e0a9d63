//! Bounding box and keyword filters over a feature collection.
//!
//! Both filters are pure: they borrow the source collection and return a new
//! one with the same `type` and the matching features in source order, so
//! they can be chained in either order for a logical AND.

mod bbox;
mod keyword;

use rayon::prelude::*;

use crate::models::{Feature, FeatureCollection};

pub use bbox::{filter_by_bounding_box, filter_within, BoundingBox};
pub use keyword::{filter_by_keyword, matches_keyword};

/// Copy the features satisfying `predicate` into a new collection.
///
/// Runs across the rayon pool; `collect` keeps the source order.
fn retain_matching<F>(collection: &FeatureCollection, predicate: F) -> FeatureCollection
where
    F: Fn(&Feature) -> bool + Sync,
{
    let features: Vec<Feature> = collection
        .features()
        .par_iter()
        .filter(|feature| predicate(feature))
        .cloned()
        .collect();

    FeatureCollection {
        kind: collection.kind().to_string(),
        features,
    }
}
