//! Removal of the `renovate` entry from `package.json`.
//!
//! The manifest is read once, edited in memory and committed back only if a
//! `renovate` entry was actually removed. Archived repositories are skipped
//! before any request is made.

mod error;
mod outcome;

pub use error::StripError;
pub use outcome::{SkipReason, StripOutcome};

use crate::contents::{update_text_file, ContentChange, ContentStore, GitHubContents, RemoteFile};
use crate::manifest_path::package_json_path;
use crate::repository::Repository;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, info_span, Instrument};

/// Key holding the Renovate configuration in `package.json`.
pub const RENOVATE_KEY: &str = "renovate";

/// Options for [`strip_renovate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StripOptions {
    /// Location of `package.json` if it is not in the repository root.
    ///
    /// May name a directory or the manifest itself.
    #[serde(default)]
    pub path: Option<String>,
}

impl StripOptions {
    /// Options targeting the manifest at `path`.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// Returns the commit message used when removing the entry from `path`.
#[must_use]
pub fn commit_message(path: &str) -> String {
    format!("build: remove renovate setup from {path}")
}

/// Computes the new manifest content with the `renovate` entry removed.
///
/// Returns [`ContentChange::NoChange`] if the file does not exist, is not a
/// JSON object or has no `renovate` key. Otherwise the remaining object is
/// pretty-printed with two-space indentation, original key order and a
/// trailing newline.
///
/// # Errors
///
/// Returns [`StripError::ParseError`] if the existing content is not valid JSON.
pub fn remove_renovate_entry(path: &str, file: &RemoteFile) -> Result<ContentChange, StripError> {
    let content = match (file.exists, file.content.as_deref()) {
        (true, Some(content)) => content,
        _ => return Ok(ContentChange::NoChange),
    };

    let mut manifest: Value =
        serde_json::from_str(content).map_err(|source| StripError::ParseError {
            path: path.to_string(),
            source,
        })?;

    let Some(object) = manifest.as_object_mut() else {
        return Ok(ContentChange::NoChange);
    };

    if object.shift_remove(RENOVATE_KEY).is_none() {
        return Ok(ContentChange::NoChange);
    }

    // Integers are written back unchanged; a float keeps a fractional part,
    // so `1.0` stays `1.0` and `1e3` becomes `1000.0`.
    let mut updated =
        serde_json::to_string_pretty(&manifest).map_err(|source| StripError::SerializeError {
            path: path.to_string(),
            source,
        })?;
    updated.push('\n');

    Ok(ContentChange::Update(updated))
}

/// Removes the `renovate` entry from the repository's `package.json`.
///
/// Makes at most one read and one write through `store`. Archived
/// repositories are reported as skipped without touching `store`.
///
/// # Errors
///
/// Returns [`StripError`] if the manifest is not valid JSON or if reading or
/// committing it fails. Errors are not retried.
pub async fn strip_renovate<S>(
    store: &S,
    repository: &Repository,
    options: &StripOptions,
) -> Result<StripOutcome, StripError>
where
    S: ContentStore + ?Sized,
{
    let path = package_json_path(options.path.as_deref());
    let owner = repository.owner.login.as_str();
    let repo = repository.name.as_str();

    if repository.archived {
        info!(
            owner,
            repo,
            updated = false,
            "{} is archived, ignoring.",
            repository.html_url
        );
        return Ok(StripOutcome::skipped(path, SkipReason::Archived));
    }

    let span = info_span!("strip_renovate", repo = %repository.full_name(), path = %path);

    async {
        let mut skipped = None;
        let write = update_text_file(store, &path, &commit_message(&path), |file| {
            let change = remove_renovate_entry(&path, file)?;
            if change == ContentChange::NoChange {
                let reason = if file.exists {
                    SkipReason::NoRenovateEntry
                } else {
                    SkipReason::MissingManifest
                };
                info!(owner, repo, updated = false, "{}: {}", path, reason.as_str());
                skipped = Some(reason);
            }
            Ok::<_, StripError>(change)
        })
        .await?;

        match write.commit_url.as_deref() {
            Some(url) if write.updated => {
                info!(owner, repo, updated = true, "'renovate' entry removed: {url}");
            }
            _ => {
                info!(owner, repo, updated = write.updated, "No changes committed");
            }
        }

        Ok(StripOutcome {
            path: path.clone(),
            updated: write.updated,
            commit_url: write.commit_url,
            skipped: if write.updated { None } else { skipped },
        })
    }
    .instrument(span)
    .await
}

/// Removes the `renovate` entry using the GitHub contents API.
///
/// # Errors
///
/// See [`strip_renovate`].
pub async fn strip_renovate_from_github(
    octocrab: &Octocrab,
    repository: &Repository,
    options: &StripOptions,
) -> Result<StripOutcome, StripError> {
    let store = GitHubContents::new(
        octocrab.clone(),
        &repository.owner.login,
        &repository.name,
    );
    strip_renovate(&store, repository, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::{ContentsError, FileWrite, MockContentStore};
    use crate::repository::RepositoryOwner;
    use mockall::predicate::eq;

    const COMMIT_URL: &str = "https://github.com/octocat/Hello-World/commit/abc";

    fn repository() -> Repository {
        Repository {
            owner: RepositoryOwner {
                login: "octocat".to_string(),
            },
            name: "Hello-World".to_string(),
            archived: false,
            html_url: "https://github.com/octocat/Hello-World".to_string(),
        }
    }

    fn octoherd_manifest(with_renovate: bool) -> Value {
        let mut manifest = serde_json::json!({
            "name": "octoherd-cli",
            "version": "0.0.0",
            "description": "",
            "main": "index.js",
            "scripts": {
                "test": "echo \"Error: no test specified\" && exit 1"
            }
        });
        let object = manifest.as_object_mut().unwrap();
        if with_renovate {
            object.insert(
                "renovate".to_string(),
                serde_json::json!({ "extends": ["renovate-config-base"] }),
            );
        }
        object.insert("author".to_string(), Value::String(String::new()));
        object.insert("license".to_string(), Value::String("ISC".to_string()));
        manifest
    }

    #[test]
    fn formats_commit_message() {
        assert_eq!(
            commit_message("package.json"),
            "build: remove renovate setup from package.json"
        );
    }

    #[test]
    fn removes_entry_preserving_key_order_and_spacing() {
        let content = octoherd_manifest(true).to_string();
        let file = RemoteFile::existing(content, "randomSha");

        let change = remove_renovate_entry("package.json", &file).unwrap();

        let expected = concat!(
            "{\n",
            "  \"name\": \"octoherd-cli\",\n",
            "  \"version\": \"0.0.0\",\n",
            "  \"description\": \"\",\n",
            "  \"main\": \"index.js\",\n",
            "  \"scripts\": {\n",
            "    \"test\": \"echo \\\"Error: no test specified\\\" && exit 1\"\n",
            "  },\n",
            "  \"author\": \"\",\n",
            "  \"license\": \"ISC\"\n",
            "}\n"
        );
        assert_eq!(change, ContentChange::Update(expected.to_string()));
    }

    #[test]
    fn float_literals_print_with_fraction() {
        let file = RemoteFile::existing(
            r#"{"name":"x","ratio":1.0,"limit":1e3,"count":1,"renovate":{}}"#,
            "sha",
        );

        let change = remove_renovate_entry("package.json", &file).unwrap();

        let expected = concat!(
            "{\n",
            "  \"name\": \"x\",\n",
            "  \"ratio\": 1.0,\n",
            "  \"limit\": 1000.0,\n",
            "  \"count\": 1\n",
            "}\n"
        );
        assert_eq!(change, ContentChange::Update(expected.to_string()));
    }

    #[test]
    fn leaves_manifest_without_entry_untouched() {
        let file = RemoteFile::existing(r#"{"name":"x"}"#, "sha");
        assert_eq!(
            remove_renovate_entry("package.json", &file).unwrap(),
            ContentChange::NoChange
        );
    }

    #[test]
    fn leaves_missing_manifest_untouched() {
        assert_eq!(
            remove_renovate_entry("package.json", &RemoteFile::missing()).unwrap(),
            ContentChange::NoChange
        );
    }

    #[test]
    fn ignores_non_object_manifest() {
        let file = RemoteFile::existing(r#"["renovate"]"#, "sha");
        assert_eq!(
            remove_renovate_entry("package.json", &file).unwrap(),
            ContentChange::NoChange
        );
    }

    #[test]
    fn rejects_invalid_json() {
        let file = RemoteFile::existing("{ not json", "sha");
        assert!(matches!(
            remove_renovate_entry("package.json", &file),
            Err(StripError::ParseError { .. })
        ));
    }

    #[tokio::test]
    async fn commits_manifest_without_entry() {
        let original = octoherd_manifest(true).to_string();
        let mut store = MockContentStore::new();
        store
            .expect_read_file()
            .with(eq("package.json"))
            .times(1)
            .returning(move |_| Ok(RemoteFile::existing(original.clone(), "randomSha")));
        store
            .expect_write_file()
            .withf(|request| {
                let written: Value = serde_json::from_str(&request.content).unwrap();
                written == octoherd_manifest(false)
                    && request.message == "build: remove renovate setup from package.json"
                    && request.sha.as_deref() == Some("randomSha")
            })
            .times(1)
            .returning(|_| {
                Ok(FileWrite {
                    updated: true,
                    commit_url: Some(COMMIT_URL.to_string()),
                })
            });

        let outcome = strip_renovate(&store, &repository(), &StripOptions::default())
            .await
            .unwrap();

        assert!(outcome.updated);
        assert_eq!(outcome.commit_url.as_deref(), Some(COMMIT_URL));
        assert_eq!(outcome.skipped, None);
    }

    #[tokio::test]
    async fn archived_repository_makes_no_requests() {
        let mut store = MockContentStore::new();
        store.expect_read_file().never();
        store.expect_write_file().never();

        let mut repository = repository();
        repository.archived = true;

        let outcome = strip_renovate(&store, &repository, &StripOptions::default())
            .await
            .unwrap();

        assert!(!outcome.updated);
        assert_eq!(outcome.skipped, Some(SkipReason::Archived));
    }

    #[tokio::test]
    async fn missing_manifest_is_not_created() {
        let mut store = MockContentStore::new();
        store
            .expect_read_file()
            .with(eq("package.json"))
            .returning(|_| Ok(RemoteFile::missing()));
        store.expect_write_file().never();

        let outcome = strip_renovate(&store, &repository(), &StripOptions::default())
            .await
            .unwrap();

        assert!(!outcome.updated);
        assert_eq!(outcome.skipped, Some(SkipReason::MissingManifest));
    }

    #[tokio::test]
    async fn resolves_custom_directory_path() {
        let mut store = MockContentStore::new();
        store
            .expect_read_file()
            .with(eq("my/path/to/package.json"))
            .times(1)
            .returning(|_| Ok(RemoteFile::existing(r#"{"name":"x"}"#, "sha")));
        store.expect_write_file().never();

        let outcome = strip_renovate(&store, &repository(), &StripOptions::with_path("my/path/to"))
            .await
            .unwrap();

        assert_eq!(outcome.path, "my/path/to/package.json");
        assert_eq!(outcome.skipped, Some(SkipReason::NoRenovateEntry));
    }

    #[tokio::test]
    async fn server_error_keeps_status() {
        let mut store = MockContentStore::new();
        store.expect_read_file().returning(|path| {
            Err(ContentsError::Http {
                path: path.to_string(),
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        });
        store.expect_write_file().never();

        let err = strip_renovate(&store, &repository(), &StripOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn directory_path_is_rejected() {
        let mut store = MockContentStore::new();
        store.expect_read_file().returning(|path| {
            Err(ContentsError::NotAFile {
                path: path.to_string(),
                kind: "dir".to_string(),
            })
        });
        store.expect_write_file().never();

        let err = strip_renovate(&store, &repository(), &StripOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "package.json is not a file, but a dir");
    }

    #[tokio::test]
    async fn invalid_manifest_aborts_without_commit() {
        let mut store = MockContentStore::new();
        store
            .expect_read_file()
            .returning(|_| Ok(RemoteFile::existing("{ \"renovate\": ", "sha")));
        store.expect_write_file().never();

        let err = strip_renovate(&store, &repository(), &StripOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StripError::ParseError { .. }));
    }
}
