mod common;

use common::{grid, names, neighborhood, two_neighborhoods};
use redline::filter::{filter_by_bounding_box, filter_by_keyword};
use redline::models::{Feature, FeatureCollection, Geometry, Point, Properties};

#[test]
fn test_box_covering_everything_keeps_all() {
    let result = filter_by_bounding_box(&two_neighborhoods(), -71.0, -70.0, 40.0, 41.0);
    assert_eq!(result.len(), 2);
    assert_eq!(result.kind(), "FeatureCollection");
}

#[test]
fn test_feature_crossing_southern_edge_is_excluded() {
    // neighborhood2 reaches down to lat 40.0, below the box
    let result = filter_by_bounding_box(&two_neighborhoods(), -71.0, -70.0, 40.5, 41.0);
    assert_eq!(result.len(), 1);
    assert_eq!(names(&result), vec!["neighborhood1"]);
}

#[test]
fn test_feature_crossing_eastern_edge_is_excluded() {
    // neighborhood1 extends east of -70.5
    let result = filter_by_bounding_box(&two_neighborhoods(), -71.0, -70.5, 40.0, 41.0);
    assert_eq!(result.len(), 1);
    assert_eq!(names(&result), vec!["neighborhood2"]);
}

#[test]
fn test_disjoint_box_keeps_nothing() {
    let result = filter_by_bounding_box(&two_neighborhoods(), -72.0, -71.5, 42.0, 43.0);
    assert!(result.is_empty());
}

#[test]
fn test_empty_collection() {
    let empty = FeatureCollection::new("FeatureCollection", vec![]);
    assert!(filter_by_bounding_box(&empty, -180.0, 180.0, -90.0, 90.0).is_empty());
    assert!(filter_by_keyword(&empty, "keyword1").is_empty());
}

#[test]
fn test_missing_geometry_never_inside() {
    let collection = FeatureCollection::new(
        "FeatureCollection",
        vec![Feature::new(None, Some(Properties::named("ghost")))],
    );
    let result = filter_by_bounding_box(&collection, -180.0, 180.0, -90.0, 90.0);
    assert!(result.is_empty());
}

#[test]
fn test_single_outlier_in_second_polygon_excludes_feature() {
    let inside = common::rectangle(1.0, 1.0, 2.0, 2.0);
    let mut stray = common::rectangle(3.0, 3.0, 4.0, 4.0);
    stray[2] = Point::new(4.0, 10.01);

    let feature = Feature::new(
        Some(Geometry::new(vec![vec![inside], vec![stray]])),
        Some(Properties::named("split")),
    );
    let collection = FeatureCollection::new("FeatureCollection", vec![feature]);

    assert!(filter_by_bounding_box(&collection, 0.0, 10.0, 0.0, 10.0).is_empty());
    assert_eq!(filter_by_bounding_box(&collection, 0.0, 10.0, 0.0, 10.01).len(), 1);
}

#[test]
fn test_keyword_match() {
    let result = filter_by_keyword(&two_neighborhoods(), "keyword1");
    assert_eq!(result.len(), 1);
    assert_eq!(names(&result), vec!["neighborhood1"]);
}

#[test]
fn test_keyword_substring_matches_both() {
    let result = filter_by_keyword(&two_neighborhoods(), "keyword");
    assert_eq!(names(&result), vec!["neighborhood1", "neighborhood2"]);
}

#[test]
fn test_keyword_no_match() {
    assert!(filter_by_keyword(&two_neighborhoods(), "nonexistent").is_empty());
}

#[test]
fn test_keyword_skips_missing_properties_and_empty_descriptions() {
    let collection = FeatureCollection::new(
        "FeatureCollection",
        vec![
            Feature::new(None, None),
            Feature::new(None, Some(Properties::named("blank"))),
            neighborhood("described", "x", (0.0, 1.0), (0.0, 1.0)),
        ],
    );
    assert_eq!(names(&filter_by_keyword(&collection, "")), vec!["described"]);
}

#[test]
fn test_keyword_then_box() {
    let collection = two_neighborhoods();
    let by_keyword = filter_by_keyword(&collection, "keyword1");
    let result = filter_by_bounding_box(&by_keyword, -71.0, -70.0, 40.0, 41.0);
    assert_eq!(names(&result), vec!["neighborhood1"]);
}

#[test]
fn test_filters_commute() {
    let collection = grid(12, 9);
    let (min_lon, max_lon, min_lat, max_lat) = (-78.2, -71.5, 31.0, 36.5);

    let a = filter_by_bounding_box(
        &filter_by_keyword(&collection, "brick"),
        min_lon,
        max_lon,
        min_lat,
        max_lat,
    );
    let b = filter_by_keyword(
        &filter_by_bounding_box(&collection, min_lon, max_lon, min_lat, max_lat),
        "brick",
    );
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_filters_are_idempotent() {
    let collection = grid(10, 10);

    let once = filter_by_keyword(&collection, "frame");
    assert_eq!(filter_by_keyword(&once, "frame"), once);

    let once = filter_by_bounding_box(&collection, -76.0, -72.0, 32.0, 38.0);
    assert_eq!(
        filter_by_bounding_box(&once, -76.0, -72.0, 32.0, 38.0),
        once
    );
}

#[test]
fn test_order_is_preserved() {
    let collection = grid(20, 20);
    let result = filter_by_bounding_box(&collection, -75.0, -65.0, 35.0, 45.0);

    let expected: Vec<&str> = names(&collection)
        .into_iter()
        .filter(|name| result.iter().any(|f| f.name() == Some(*name)))
        .collect();
    assert_eq!(names(&result), expected);
    assert_eq!(result.len(), 10 * 10);
}

#[test]
fn test_source_is_untouched() {
    let collection = grid(4, 4);
    let snapshot = collection.clone();
    let _ = filter_by_bounding_box(&collection, -80.0, -79.0, 30.0, 31.0);
    let _ = filter_by_keyword(&collection, "brick");
    assert_eq!(collection, snapshot);
}
