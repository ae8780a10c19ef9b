use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::RepoId;
use crate::error::{NextSemverError, Result};
use crate::release::{LatestRelease, ReleaseHost};

const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Latest-release response body (only the field we read)
#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    tag_name: String,
}

/// GitHub Releases implementation of [ReleaseHost].
///
/// Performs a single blocking GET against
/// `/repos/{owner}/{repo}/releases/latest` with a bearer token. No
/// retries; HTTP 404 means "no releases yet" and every other failure
/// is fatal to the run.
pub struct GithubReleaseHost {
    client: Client,
    token: String,
    api_base: String,
}

impl GithubReleaseHost {
    /// Create a host client for the public GitHub API.
    ///
    /// Honors GITHUB_API_URL when set (GitHub Enterprise runners set it).
    ///
    /// # Arguments
    /// * `token` - Bearer token for authentication
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let api_base = std::env::var("GITHUB_API_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        GithubReleaseHost::with_api_base(token, api_base)
    }

    /// Create a host client against an explicit API base URL.
    ///
    /// Used by tests to point at a local stub server.
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("next-semver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NextSemverError::release_host(format!("Cannot build client: {}", e)))?;

        Ok(GithubReleaseHost {
            client,
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }
}

impl ReleaseHost for GithubReleaseHost {
    fn latest_release(&self, repo: &RepoId) -> Result<LatestRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base, repo.owner, repo.repo
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| NextSemverError::release_host(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(LatestRelease::NotFound);
        }

        if !response.status().is_success() {
            return Err(NextSemverError::release_host(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        let release: ReleaseResponse = response
            .json()
            .map_err(|e| NextSemverError::release_host(format!("Invalid response body: {}", e)))?;

        Ok(LatestRelease::Found(release.tag_name))
    }
}
