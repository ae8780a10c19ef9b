use crate::config::RepoId;
use crate::error::{NextSemverError, Result};
use crate::release::{LatestRelease, ReleaseHost};

/// Mock release host for testing without network access
pub struct MockReleaseHost {
    response: MockResponse,
}

enum MockResponse {
    Tag(String),
    Empty,
    Failure(String),
}

impl MockReleaseHost {
    /// Host whose latest release carries the given tag
    pub fn with_tag(tag: impl Into<String>) -> Self {
        MockReleaseHost {
            response: MockResponse::Tag(tag.into()),
        }
    }

    /// Host with no published releases
    pub fn empty() -> Self {
        MockReleaseHost {
            response: MockResponse::Empty,
        }
    }

    /// Host whose lookup fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockReleaseHost {
            response: MockResponse::Failure(message.into()),
        }
    }
}

impl ReleaseHost for MockReleaseHost {
    fn latest_release(&self, _repo: &RepoId) -> Result<LatestRelease> {
        match &self.response {
            MockResponse::Tag(tag) => Ok(LatestRelease::Found(tag.clone())),
            MockResponse::Empty => Ok(LatestRelease::NotFound),
            MockResponse::Failure(msg) => Err(NextSemverError::release_host(msg.clone())),
        }
    }
}
