//! Runner error types.

/// Errors that can occur while running over repositories.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// No repositories were given.
    #[error("No repositories to process")]
    NoRepositories,
}
