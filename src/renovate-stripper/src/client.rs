//! GitHub client construction.

use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

/// Builds an authenticated GitHub client.
///
/// Requests are never retried, so a failing read or write reaches GitHub
/// exactly once and its status is reported as-is. `base_uri` points the
/// client at a GitHub Enterprise API (or any compatible server) instead of
/// `https://api.github.com`.
///
/// # Errors
///
/// Returns [`octocrab::Error`] if `base_uri` is not a valid URI or the HTTP
/// client cannot be built.
pub fn github_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, octocrab::Error> {
    let mut builder = Octocrab::builder()
        .personal_token(token.to_string())
        .add_retry_config(RetryConfig::None);

    if let Some(base_uri) = base_uri {
        builder = builder.base_uri(base_uri)?;
    }

    builder.build()
}
