//! File content error types.

use thiserror::Error;

/// Errors raised while reading or writing repository files.
#[derive(Debug, Error)]
pub enum ContentsError {
    /// Transport or client failure talking to GitHub.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// GitHub answered with a non-success status.
    #[error("GitHub API returned {status} for '{path}': {message}")]
    Http {
        /// Path the request targeted.
        path: String,
        /// HTTP status code of the response.
        status: u16,
        /// Message reported by the API.
        message: String,
    },

    /// The path resolved to something other than a single file.
    #[error("{path} is not a file, but a {kind}")]
    NotAFile { path: String, kind: String },

    /// The path cannot be turned into a contents API route.
    #[error("'{path}' is not a valid repository path")]
    InvalidPath { path: String },

    /// A success response did not have the expected shape.
    #[error("Unexpected GitHub response for '{path}': {source}")]
    InvalidResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file content could not be decoded as UTF-8 text.
    #[error("Failed to decode content of '{path}': {message}")]
    DecodeFailed { path: String, message: String },
}

impl ContentsError {
    /// Returns the HTTP status if GitHub answered with an error status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
