//! [`ContentStore`] backed by the GitHub repository contents API.

use super::{ContentStore, ContentsError, FileWrite, RemoteFile, WriteFileRequest};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Only the path of this URL is used; octocrab supplies the host.
const ROUTE_BASE: &str = "https://api.github.com/";

/// Contents API access for one repository.
#[derive(Clone)]
pub struct GitHubContents {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubContents {
    /// Creates a store for `owner/repo` using an authenticated client.
    pub fn new(octocrab: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    fn route(&self, path: &str) -> Result<String, ContentsError> {
        contents_route(&self.owner, &self.repo, path)
    }
}

/// Builds `/repos/{owner}/{repo}/contents/{path}` with every segment
/// percent-encoded.
fn contents_route(owner: &str, repo: &str, path: &str) -> Result<String, ContentsError> {
    let invalid = || ContentsError::InvalidPath {
        path: path.to_string(),
    };

    let mut url = Url::parse(ROUTE_BASE).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .extend(["repos", owner, repo, "contents"])
        .extend(path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url.path().to_string())
}

/// Response of `GET /repos/{owner}/{repo}/contents/{path}`.
///
/// Directories are returned as a listing, everything else as a single entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Listing(Vec<serde_json::Value>),
    Entry(ContentEntry),
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    #[serde(rename = "type")]
    kind: String,
    sha: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct PutContentsBody<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    #[serde(default)]
    html_url: Option<String>,
}

/// Error payload GitHub sends with most non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl ContentStore for GitHubContents {
    async fn read_file(&self, path: &str) -> Result<RemoteFile, ContentsError> {
        debug!(owner = %self.owner, repo = %self.repo, path, "Fetching file");

        let response = self.octocrab._get(self.route(path)?).await?;
        let status = response.status();
        if status.as_u16() == 404 {
            debug!(path, "File not found");
            return Ok(RemoteFile::missing());
        }

        let body = self.octocrab.body_to_string(response).await?;
        if !status.is_success() {
            return Err(http_error(path, status.as_u16(), status.canonical_reason(), &body));
        }

        remote_file_from_response(path, parse_body(path, &body)?)
    }

    async fn write_file(&self, request: WriteFileRequest) -> Result<FileWrite, ContentsError> {
        debug!(
            owner = %self.owner,
            repo = %self.repo,
            path = %request.path,
            "Committing file"
        );

        let body = PutContentsBody {
            message: &request.message,
            content: STANDARD.encode(request.content.as_bytes()),
            sha: request.sha.as_deref(),
        };

        let response = self
            .octocrab
            ._put(self.route(&request.path)?, Some(&body))
            .await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;
        if !status.is_success() {
            return Err(http_error(
                &request.path,
                status.as_u16(),
                status.canonical_reason(),
                &body,
            ));
        }

        let response: PutContentsResponse = parse_body(&request.path, &body)?;
        Ok(FileWrite {
            updated: true,
            commit_url: response.commit.html_url,
        })
    }
}

fn parse_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ContentsError> {
    serde_json::from_str(body).map_err(|source| ContentsError::InvalidResponse {
        path: path.to_string(),
        source,
    })
}

/// Builds an error for a non-success response, whatever its body looks like.
fn http_error(path: &str, status: u16, reason: Option<&str>, body: &str) -> ContentsError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => reason.unwrap_or("no message").to_string(),
    };

    ContentsError::Http {
        path: path.to_string(),
        status,
        message,
    }
}

/// Interprets a contents response for `path` as a single text file.
fn remote_file_from_response(
    path: &str,
    response: ContentsResponse,
) -> Result<RemoteFile, ContentsError> {
    let entry = match response {
        ContentsResponse::Listing(entries) => {
            debug!(path, entries = entries.len(), "Path is a directory");
            return Err(ContentsError::NotAFile {
                path: path.to_string(),
                kind: "dir".to_string(),
            })
        }
        ContentsResponse::Entry(entry) => entry,
    };

    if entry.kind != "file" {
        return Err(ContentsError::NotAFile {
            path: path.to_string(),
            kind: entry.kind,
        });
    }

    let content = decode_content(path, entry.content.as_deref().unwrap_or_default())?;
    Ok(RemoteFile::existing(content, entry.sha))
}

/// Decodes base64 file content as returned by GitHub (wrapped at 60 columns).
fn decode_content(path: &str, encoded: &str) -> Result<String, ContentsError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| ContentsError::DecodeFailed {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| ContentsError::DecodeFailed {
        path: path.to_string(),
        message: e.to_string(),
    })
}
