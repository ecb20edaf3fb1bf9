//! Runs the `renovate` removal over a set of repositories.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONCURRENCY};
pub use error::RunnerError;

use crate::client::github_client;
use crate::repository::{fetch_repository, RepositoryName};
use crate::strip::{strip_renovate_from_github, StripOptions, StripOutcome};
use crate::summary::{ProcessingResult, RunSummary};
use futures::stream::{self, StreamExt};
use octocrab::Octocrab;
use tracing::{error, info, warn};

/// Processes every configured repository independently.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = github_client(config.token(), config.base_uri())?;
        Ok(Self { config, octocrab })
    }

    /// Processes all repositories.
    ///
    /// A failing repository is recorded in the summary and does not stop the
    /// remaining ones.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let repositories = self.config.repositories();
        if repositories.is_empty() {
            return Err(RunnerError::NoRepositories);
        }

        info!(
            count = repositories.len(),
            concurrency = self.config.concurrency(),
            "Processing repositories"
        );

        let options = self.config.options();
        let results: Vec<ProcessingResult> = stream::iter(repositories)
            .map(|name| process_repository(&self.octocrab, name, options))
            .buffer_unordered(self.config.concurrency())
            .collect()
            .await;

        let mut summary = RunSummary::new();
        for result in results {
            summary.record_result(result);
        }

        Ok(summary)
    }
}

async fn process_repository(
    octocrab: &Octocrab,
    name: &RepositoryName,
    options: &StripOptions,
) -> ProcessingResult {
    let repository = match fetch_repository(octocrab, name).await {
        Ok(repository) => repository,
        Err(e) => {
            error!(repo = %name, error = %e, "Failed to fetch repository");
            return ProcessingResult::Failed {
                repository: name.to_string(),
                error: e.to_string(),
            };
        }
    };

    match strip_renovate_from_github(octocrab, &repository, options).await {
        Ok(outcome) => result_from_outcome(repository.full_name(), outcome),
        Err(e) => {
            error!(repo = %name, error = %e, "Failed to remove renovate entry");
            ProcessingResult::Failed {
                repository: repository.full_name(),
                error: e.to_string(),
            }
        }
    }
}

fn result_from_outcome(repository: String, outcome: StripOutcome) -> ProcessingResult {
    if outcome.updated {
        if outcome.commit_url.is_none() {
            warn!(repo = %repository, "Commit made but no URL was returned");
        }
        return ProcessingResult::Updated {
            repository,
            commit_url: outcome.commit_url,
        };
    }

    ProcessingResult::Unchanged {
        repository,
        reason: outcome
            .skipped
            .map_or("no changes", |reason| reason.as_str())
            .to_string(),
    }
}
