//! Error kinds surfaced by the loader, the JSON adapter and query validation.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RedlineError>;

#[derive(Debug, thiserror::Error)]
pub enum RedlineError {
    /// Source file does not exist
    #[error("Feature collection not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Source file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or a document that does not match the feature shape
    #[error("Failed to parse feature collection: {0}")]
    Parse(#[from] serde_json::Error),

    /// Query parameters out of range or inverted
    #[error("{0}")]
    Validation(String),
}

impl RedlineError {
    pub fn validation(message: impl Into<String>) -> Self {
        RedlineError::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RedlineError::NotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, RedlineError::Parse(_))
    }
}
