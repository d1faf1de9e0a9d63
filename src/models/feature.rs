//! Feature collection, feature and property types.
//!
//! Field names mirror the JSON document consumed by the map client, so the
//! same structs serve both the loader and the response body.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Geometry;

/// Free-form area description entries, kept in document order
pub type Descriptions = IndexMap<String, String>;

/// An ordered group of features plus a type discriminator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Collection discriminator, usually "FeatureCollection"
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Features in source order; may be empty but never absent
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(kind: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            kind: kind.into(),
            features,
        }
    }

    /// A collection with the same discriminator and no features
    pub fn empty_like(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            features: Vec::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

/// One mapped neighborhood
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature discriminator, usually "Feature"
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>, properties: Option<Properties>) -> Self {
        Self {
            kind: "Feature".to_string(),
            geometry,
            properties,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    /// Neighborhood name, if the feature carries one
    pub fn name(&self) -> Option<&str> {
        self.properties.as_ref()?.name.as_deref()
    }
}

/// Descriptive metadata attached to a feature.
///
/// HOLC fields are carried as opaque strings and never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holc_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holc_grade: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood_id: Option<f64>,

    /// Area description text searched by keyword queries
    #[serde(rename = "area_description_data", default)]
    pub descriptions: Descriptions,
}

impl Properties {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Add an area description entry, replacing any existing value for `key`
    pub fn with_description(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.descriptions.insert(key.into(), value.into());
        self
    }

    pub fn descriptions(&self) -> &Descriptions {
        &self.descriptions
    }
}
