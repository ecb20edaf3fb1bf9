//! Outcome of stripping a single repository.

use serde::Serialize;

/// Why a repository was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The repository is archived.
    Archived,

    /// The manifest does not exist.
    MissingManifest,

    /// The manifest has no `renovate` entry.
    NoRenovateEntry,
}

impl SkipReason {
    /// Returns a human-readable description.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archived => "repository is archived",
            Self::MissingManifest => "package.json does not exist",
            Self::NoRenovateEntry => "no 'renovate' entry",
        }
    }
}

/// Result of stripping the `renovate` entry from one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripOutcome {
    /// Resolved manifest path.
    pub path: String,

    /// Whether a commit was made.
    pub updated: bool,

    /// HTML URL of the commit, if one was made.
    pub commit_url: Option<String>,

    /// Why nothing was committed, if known.
    pub skipped: Option<SkipReason>,
}

impl StripOutcome {
    pub(crate) fn skipped(path: String, reason: SkipReason) -> Self {
        Self {
            path,
            updated: false,
            commit_url: None,
            skipped: Some(reason),
        }
    }
}
