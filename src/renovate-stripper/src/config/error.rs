//! Run file and repository name error types.

use thiserror::Error;

/// Errors raised while loading a run file or parsing repository names.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The run file exists but could not be read.
    #[error("Could not read run file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The run file is not valid TOML or has unknown value types.
    #[error("Run file '{path}' is not valid TOML: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The run file parsed, but one of its values is unusable.
    #[error("Invalid run file '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// The run file passed with `--config` does not exist.
    #[error("Run file not found: {path}")]
    MissingFile { path: String },

    /// A repository was not given as `owner/name`.
    #[error("Invalid repository '{name}': expected 'owner/name'")]
    InvalidRepositoryName { name: String },
}
