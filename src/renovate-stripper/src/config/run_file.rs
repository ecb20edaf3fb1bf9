//! Run file deserialization.

use crate::config::ConfigError;
use crate::repository::RepositoryName;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parsed contents of a run file.
///
/// ```toml
/// repositories = ["octocat/Hello-World", "octocat/Spoon-Knife"]
/// path = "packages/app"
/// concurrency = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunFile {
    /// Repositories to process, in "owner/name" format.
    #[serde(default)]
    pub repositories: Vec<String>,

    /// Location of `package.json` inside each repository.
    pub path: Option<String>,

    /// Maximum number of repositories processed at once.
    pub concurrency: Option<usize>,
}

impl RunFile {
    /// Loads and validates a run file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading run file");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let run_file: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        run_file.validate(path)?;
        Ok(run_file)
    }

    /// Parses the listed repositories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepositoryName`] for the first malformed name.
    pub fn repository_names(&self) -> Result<Vec<RepositoryName>, ConfigError> {
        self.repositories
            .iter()
            .map(|name| RepositoryName::parse(name))
            .collect()
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.concurrency == Some(0) {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "concurrency must be at least 1".to_string(),
            });
        }

        self.repository_names().map_err(|e| match e {
            ConfigError::InvalidRepositoryName { name } => ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!("repository '{name}' is not in 'owner/name' format"),
            },
            other => other,
        })?;

        Ok(())
    }
}
