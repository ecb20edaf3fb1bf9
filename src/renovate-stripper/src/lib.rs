#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod contents;
pub mod manifest_path;
pub mod repository;
pub mod runner;
pub mod strip;
pub mod summary;

pub use client::github_client;
pub use config::{ConfigError, RunFile};
pub use contents::{
    update_text_file, ContentChange, ContentStore, ContentsError, FileWrite, GitHubContents,
    RemoteFile, WriteFileRequest,
};
pub use manifest_path::{package_json_path, PACKAGE_JSON};
pub use repository::{fetch_repository, Repository, RepositoryName, RepositoryOwner};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_CONCURRENCY};
pub use strip::{
    commit_message, remove_renovate_entry, strip_renovate, strip_renovate_from_github,
    SkipReason, StripError, StripOptions, StripOutcome, RENOVATE_KEY,
};
pub use summary::{ProcessingResult, RunSummary};
