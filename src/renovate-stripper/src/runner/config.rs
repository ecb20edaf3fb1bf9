//! Runner configuration.

use crate::config::{ConfigError, RunFile};
use crate::repository::RepositoryName;
use crate::strip::StripOptions;

/// Default number of repositories processed at once.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Configuration for a run over several repositories.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Repositories to process.
    repositories: Vec<RepositoryName>,
    /// Options applied to every repository.
    options: StripOptions,
    /// Maximum repositories processed at once.
    concurrency: usize,
    /// API root, when not `https://api.github.com`.
    base_uri: Option<String>,
}

impl RunnerConfig {
    /// Creates a configuration with no repositories and default options.
    pub fn new(token: String) -> Self {
        Self {
            token,
            repositories: Vec::new(),
            options: StripOptions::default(),
            concurrency: DEFAULT_CONCURRENCY,
            base_uri: None,
        }
    }

    /// Applies the values of a run file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a listed repository name is malformed.
    pub fn with_run_file(mut self, run_file: &RunFile) -> Result<Self, ConfigError> {
        self.repositories.extend(run_file.repository_names()?);
        if let Some(path) = &run_file.path {
            self.options.path = Some(path.clone());
        }
        if let Some(concurrency) = run_file.concurrency {
            self.concurrency = concurrency;
        }
        Ok(self)
    }

    /// Adds repositories to process, skipping names already listed.
    pub fn with_repositories(mut self, repositories: impl IntoIterator<Item = RepositoryName>) -> Self {
        for repository in repositories {
            if !self.repositories.contains(&repository) {
                self.repositories.push(repository);
            }
        }
        self
    }

    /// Sets the `package.json` location used in every repository.
    pub fn with_path(mut self, path: String) -> Self {
        self.options.path = Some(path);
        self
    }

    /// Sets the maximum number of repositories processed at once.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Sends API requests to `base_uri` instead of `https://api.github.com`.
    pub fn with_base_uri(mut self, base_uri: String) -> Self {
        self.base_uri = Some(base_uri);
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the repositories to process.
    pub fn repositories(&self) -> &[RepositoryName] {
        &self.repositories
    }

    /// Returns the options applied to every repository.
    pub fn options(&self) -> &StripOptions {
        &self.options
    }

    /// Returns the max repositories processed at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the API root override, if any.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }
}
