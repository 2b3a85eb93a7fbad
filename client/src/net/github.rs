//! GitHub repository metadata client.
//!
//! Client-side (hydrate): one real HTTP GET via `gloo-net`.
//! Server-side (SSR): returns `MetricError::Unavailable` since the widget
//! only fetches in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, unexpected body shape) maps to a
//! `MetricError` so the widget can degrade to a plain link without panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use serde::Deserialize;

/// Repository whose star count is shown on the site.
pub const GITHUB_REPO: &str = "parapidcom/gorunn-example-projects";

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_WEB_BASE: &str = "https://github.com";

/// Failure fetching or decoding the repository metric.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),

    /// The body was not a repository object with an integer star count.
    #[error("unexpected payload: {0}")]
    Payload(String),

    /// No browser environment to fetch from.
    #[error("metric fetch not available on server")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct RepoMetadata {
    stargazers_count: u64,
}

/// REST endpoint for a repository's metadata.
pub fn repo_api_endpoint(repo: &str) -> String {
    format!("{GITHUB_API_BASE}/repos/{repo}")
}

/// Public web page of a repository.
pub fn repo_html_url(repo: &str) -> String {
    format!("{GITHUB_WEB_BASE}/{repo}")
}

/// Extract `stargazers_count` from a repository metadata body.
///
/// # Errors
///
/// Returns `MetricError::Payload` if the body is not JSON or lacks an
/// unsigned integer `stargazers_count`.
pub fn parse_stargazers(body: &str) -> Result<u64, MetricError> {
    serde_json::from_str::<RepoMetadata>(body)
        .map(|meta| meta.stargazers_count)
        .map_err(|e| MetricError::Payload(e.to_string()))
}

/// Fetch the star count for `repo` with a single GET.
///
/// # Errors
///
/// Returns a `MetricError` on transport failure, non-OK status, malformed
/// body, or when called outside the browser.
pub async fn fetch_stargazers(repo: &str) -> Result<u64, MetricError> {
    #[cfg(feature = "hydrate")]
    {
        let url = repo_api_endpoint(repo);
        let resp = gloo_net::http::Request::get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| MetricError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(MetricError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| MetricError::Transport(e.to_string()))?;
        parse_stargazers(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = repo;
        Err(MetricError::Unavailable)
    }
}
