//! Loads the feature collection served for the lifetime of the process.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::adapter;
use crate::error::{RedlineError, Result};
use crate::models::FeatureCollection;

/// Read a UTF-8 JSON document from `path` and decode it.
///
/// Fails with [`RedlineError::NotFound`] when the file is missing and
/// [`RedlineError::Parse`] when its content is not a feature collection.
/// There is no retry and no partial result.
pub fn load<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let path = path.as_ref();
    info!("Loading feature collection from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RedlineError::NotFound {
            path: path.to_path_buf(),
        },
        _ => RedlineError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let collection = adapter::decode(&content)?;

    info!(
        "Loaded {} features from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}
