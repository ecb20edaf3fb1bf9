//! Processing result types.

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// The `renovate` entry was removed and committed.
    Updated {
        /// Repository full name.
        repository: String,
        /// HTML URL of the commit.
        commit_url: Option<String>,
    },

    /// Nothing was committed.
    Unchanged {
        /// Repository full name.
        repository: String,
        /// Reason nothing was committed.
        reason: String,
    },

    /// Processing failed.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl ProcessingResult {
    /// Returns the repository full name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Updated { repository, .. }
            | Self::Unchanged { repository, .. }
            | Self::Failed { repository, .. } => repository,
        }
    }
}
