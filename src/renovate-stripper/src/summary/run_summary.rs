//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories processed.
    pub repositories_processed: usize,

    /// Number of repositories where the entry was removed.
    pub updated: usize,

    /// Number of repositories left unchanged.
    pub unchanged: usize,

    /// Number of repositories that failed.
    pub failed: usize,

    /// Per-repository results.
    pub results: Vec<ProcessingResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        self.repositories_processed += 1;
        match &result {
            ProcessingResult::Updated { .. } => self.updated += 1,
            ProcessingResult::Unchanged { .. } => self.unchanged += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
