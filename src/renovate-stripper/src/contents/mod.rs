//! Text file access for remote repositories.
//!
//! Reading and committing a single file is hidden behind [`ContentStore`] so
//! content transforms can be exercised without a network. [`update_text_file`]
//! runs the fetch, compare and commit sequence on top of any store.

mod error;
mod github;

pub use error::ContentsError;
pub use github::GitHubContents;

use async_trait::async_trait;
use tracing::debug;

/// Current state of a file in a remote repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteFile {
    /// Whether the file exists.
    pub exists: bool,

    /// Decoded text content, if the file exists.
    pub content: Option<String>,

    /// Blob SHA of the current revision, if the file exists.
    pub sha: Option<String>,
}

impl RemoteFile {
    /// A file that does not exist yet.
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    /// An existing file with the given content and blob SHA.
    #[must_use]
    pub fn existing(content: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            exists: true,
            content: Some(content.into()),
            sha: Some(sha.into()),
        }
    }
}

/// Result of writing a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileWrite {
    /// Whether a commit was made.
    pub updated: bool,

    /// HTML URL of the resulting commit.
    pub commit_url: Option<String>,
}

impl FileWrite {
    /// Nothing was committed.
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }
}

/// Request to commit new content to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFileRequest {
    /// Repository-relative path of the file.
    pub path: String,

    /// New text content.
    pub content: String,

    /// Commit message.
    pub message: String,

    /// Blob SHA of the revision being replaced, `None` when creating the file.
    pub sha: Option<String>,
}

/// Desired change produced by a content transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChange {
    /// Leave the file as it is. No commit is made.
    NoChange,

    /// Replace the file content.
    Update(String),
}

/// Read and write access to text files of a single repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetches the current state of the file at `path`.
    ///
    /// A missing file is not an error and yields [`RemoteFile::missing`].
    ///
    /// # Errors
    ///
    /// Returns [`ContentsError::NotAFile`] if `path` is a directory or
    /// another non-file entry, or the underlying API error otherwise.
    async fn read_file(&self, path: &str) -> Result<RemoteFile, ContentsError>;

    /// Commits the requested content.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error if the commit fails.
    async fn write_file(&self, request: WriteFileRequest) -> Result<FileWrite, ContentsError>;
}

/// Reads `path`, applies `transform` and commits the result if it differs.
///
/// At most one read and one write are made. The write is skipped when the
/// transform returns [`ContentChange::NoChange`] or when it returns the content
/// already stored.
///
/// # Errors
///
/// Store errors are converted into `E` and returned unchanged, as are errors
/// raised by `transform`. Nothing is written after a failure.
pub async fn update_text_file<S, F, E>(
    store: &S,
    path: &str,
    message: &str,
    transform: F,
) -> Result<FileWrite, E>
where
    S: ContentStore + ?Sized,
    F: FnOnce(&RemoteFile) -> Result<ContentChange, E>,
    E: From<ContentsError>,
{
    let current = store.read_file(path).await?;

    let content = match transform(&current)? {
        ContentChange::NoChange => return Ok(FileWrite::unchanged()),
        ContentChange::Update(content) => content,
    };

    if current.exists && current.content.as_deref() == Some(content.as_str()) {
        debug!(path, "Content unchanged, skipping commit");
        return Ok(FileWrite::unchanged());
    }

    let write = store
        .write_file(WriteFileRequest {
            path: path.to_string(),
            content,
            message: message.to_string(),
            sha: current.sha,
        })
        .await?;
    Ok(write)
}
