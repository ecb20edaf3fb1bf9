//! Renovate stripping error types.

use crate::contents::ContentsError;
use thiserror::Error;

/// Errors that abort stripping the `renovate` entry.
#[derive(Debug, Error)]
pub enum StripError {
    /// The existing manifest is not valid JSON.
    #[error("Failed to parse '{path}' as JSON: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The edited manifest could not be serialized.
    #[error("Failed to serialize '{path}': {source}")]
    SerializeError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or committing the manifest failed.
    #[error(transparent)]
    Contents(#[from] ContentsError),
}

impl StripError {
    /// Returns the HTTP status of a failed GitHub request, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Contents(e) => e.status(),
            _ => None,
        }
    }
}
