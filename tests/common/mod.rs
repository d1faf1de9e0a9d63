#![allow(dead_code)]

use redline::models::{Feature, FeatureCollection, Geometry, Point, Properties};

/// Closed rectangular ring covering the given ranges
pub fn rectangle(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Vec<Point> {
    vec![
        Point::new(min_lon, min_lat),
        Point::new(min_lon, max_lat),
        Point::new(max_lon, max_lat),
        Point::new(max_lon, min_lat),
        Point::new(min_lon, min_lat),
    ]
}

pub fn neighborhood(
    name: &str,
    keyword: &str,
    lon: (f64, f64),
    lat: (f64, f64),
) -> Feature {
    Feature::new(
        Some(Geometry::multi_polygon(vec![vec![rectangle(
            lon.0, lat.0, lon.1, lat.1,
        )]])),
        Some(Properties::named(name).with_description("desc", keyword)),
    )
}

/// neighborhood1 sits in lon [-70.5, -70.0] x lat [40.5, 41.0];
/// neighborhood2 spans lon [-71.0, -70.5] x lat [40.0, 41.0]
pub fn two_neighborhoods() -> FeatureCollection {
    FeatureCollection::new(
        "FeatureCollection",
        vec![
            neighborhood("neighborhood1", "keyword1", (-70.5, -70.0), (40.5, 41.0)),
            neighborhood("neighborhood2", "keyword2", (-71.0, -70.5), (40.0, 41.0)),
        ],
    )
}

/// A grid of small squares with alternating description text
pub fn grid(columns: usize, rows: usize) -> FeatureCollection {
    let mut features = Vec::new();
    for row in 0..rows {
        for col in 0..columns {
            let lon = -80.0 + col as f64;
            let lat = 30.0 + row as f64;
            let keyword = if (row + col) % 2 == 0 { "brick homes" } else { "frame houses" };
            features.push(neighborhood(
                &format!("cell-{}-{}", row, col),
                keyword,
                (lon, lon + 0.5),
                (lat, lat + 0.5),
            ));
        }
    }
    FeatureCollection::new("FeatureCollection", features)
}

pub fn names(collection: &FeatureCollection) -> Vec<&str> {
    collection
        .iter()
        .map(|feature| feature.name().unwrap_or_default())
        .collect()
}
