//! Run configuration.
//!
//! Repositories and options can be listed in a TOML run file. Values given on
//! the command line take precedence over the file.

mod error;
mod run_file;

pub use error::ConfigError;
pub use run_file::RunFile;
