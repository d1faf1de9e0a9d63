//! Substring search over area description text.

use tracing::debug;

use super::retain_matching;
use crate::models::{Feature, FeatureCollection};

/// True when some description value contains `keyword` (case-sensitive).
///
/// Features without properties, or with no description entries, never match.
pub fn matches_keyword(feature: &Feature, keyword: &str) -> bool {
    feature.properties().map_or(false, |properties| {
        properties
            .descriptions()
            .values()
            .any(|description| description.contains(keyword))
    })
}

/// Keep the features whose descriptions mention `keyword`, in original order.
pub fn filter_by_keyword(collection: &FeatureCollection, keyword: &str) -> FeatureCollection {
    let result = retain_matching(collection, |feature| matches_keyword(feature, keyword));
    debug!(
        "Keyword {:?}: {} of {} features matched",
        keyword,
        result.len(),
        collection.len()
    );
    result
}
