//! Repository references.

use crate::config::ConfigError;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Owner of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// User or organization login.
    pub login: String,
}

/// A repository to process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository owner.
    pub owner: RepositoryOwner,

    /// Repository name.
    pub name: String,

    /// Whether the repository is archived (read-only).
    #[serde(default)]
    pub archived: bool,

    /// GitHub URL of the repository.
    #[serde(default)]
    pub html_url: String,
}

impl Repository {
    /// Returns the repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// A repository name in "owner/name" format, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryName {
    /// Parses an "owner/name" string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepositoryName`] unless the input is exactly
    /// two non-empty segments separated by `/`.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepositoryName {
            name: input.to_string(),
        };

        let (owner, name) = input.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Fetches the repository metadata needed to process `name`.
///
/// # Errors
///
/// Returns the GitHub API error if the repository cannot be fetched.
pub async fn fetch_repository(
    octocrab: &Octocrab,
    name: &RepositoryName,
) -> Result<Repository, octocrab::Error> {
    debug!(repo = %name, "Fetching repository");
    let repo = octocrab.repos(&name.owner, &name.name).get().await?;

    Ok(Repository {
        owner: RepositoryOwner {
            login: repo
                .owner
                .map(|owner| owner.login)
                .unwrap_or_else(|| name.owner.clone()),
        },
        name: repo.name,
        archived: repo.archived.unwrap_or(false),
        html_url: repo
            .html_url
            .map(|url| url.to_string())
            .unwrap_or_else(|| format!("https://github.com/{name}")),
    })
}
