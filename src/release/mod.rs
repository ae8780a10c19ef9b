//! Release host abstraction layer
//!
//! This module provides a trait-based abstraction over the release
//! hosting service, allowing for multiple implementations including the
//! real GitHub Releases API and mock implementations for testing.
//!
//! The primary abstraction is the [ReleaseHost] trait. Concrete
//! implementations:
//!
//! - [github::GithubReleaseHost]: GitHub Releases over HTTP
//! - [mock::MockReleaseHost]: scripted responses for testing
//!
//! "No releases yet" is a normal lookup outcome, not an error, so it is
//! modeled as the [LatestRelease::NotFound] variant rather than an error
//! case; transport and auth failures travel in the `Result` error.

pub mod github;
pub mod mock;

pub use github::GithubReleaseHost;
pub use mock::MockReleaseHost;

use crate::config::RepoId;
use crate::error::Result;

/// Outcome of a latest-release lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestRelease {
    /// The repository has at least one published release with this tag
    Found(String),
    /// The repository has no published releases yet
    NotFound,
}

/// Release hosting service abstraction
///
/// ## Error Handling
///
/// A missing release history is NOT an error: implementations must
/// return `Ok(LatestRelease::NotFound)` for it. Every other failure
/// (network, authentication, rate limiting) maps to
/// [crate::error::NextSemverError::ReleaseHost] and is fatal to the run.
pub trait ReleaseHost {
    /// Get the tag name of the most recently published release
    ///
    /// # Arguments
    /// * `repo` - Repository identity (owner and repo name)
    ///
    /// # Returns
    /// * `Ok(LatestRelease::Found(tag))` - Tag of the latest release
    /// * `Ok(LatestRelease::NotFound)` - No releases published yet
    /// * `Err` - Any other release-host failure
    fn latest_release(&self, repo: &RepoId) -> Result<LatestRelease>;
}
