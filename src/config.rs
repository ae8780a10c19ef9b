use std::env;
use std::path::PathBuf;

use crate::error::{NextSemverError, Result};

/// Run configuration for a single next-semver invocation.
///
/// Collected once at startup from CLI flags and the Actions-style
/// environment, then passed explicitly into the pipeline. The core
/// never reads the process environment itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Root of the checked-out workspace (GITHUB_WORKSPACE, default ".")
    pub workspace_root: PathBuf,

    /// Directory under the workspace root to search for the manifest
    pub package_root: String,

    /// String prepended to every tag this tool manages
    pub tag_prefix: String,

    /// String appended to every tag this tool manages
    pub tag_suffix: String,

    /// Whether to persist the resolved version back into the manifest
    pub write_manifest: bool,

    /// Emit diagnostic detail to the debug channel
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            workspace_root: PathBuf::from("."),
            package_root: String::new(),
            tag_prefix: String::new(),
            tag_suffix: String::new(),
            write_manifest: false,
            verbose: false,
        }
    }
}

/// CLI-level overrides for [RunConfig] fields.
///
/// Mirrors the clap Args but in a format suitable for config loading.
/// This decoupling allows the loader to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub package_root: Option<String>,
    pub tag_prefix: Option<String>,
    pub tag_suffix: Option<String>,
    pub write_manifest: bool,
    pub verbose: bool,
}

/// Repository identity on the release host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    /// Create a repository identity from owner and repo names
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse an "owner/repo" slug (the GITHUB_REPOSITORY format)
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok(RepoId::new(owner, repo))
            }
            _ => Err(NextSemverError::config(format!(
                "Invalid repository slug: '{}' - expected owner/repo",
                slug
            ))),
        }
    }

    /// Read the repository identity from GITHUB_REPOSITORY
    pub fn from_env() -> Result<Self> {
        let slug = env::var("GITHUB_REPOSITORY")
            .map_err(|_| NextSemverError::config("GITHUB_REPOSITORY is not set"))?;
        RepoId::parse(&slug)
    }
}

/// Reads an Actions input from the environment (INPUT_<NAME>).
fn action_input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase().replace(' ', "_"));
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Loads the run configuration.
///
/// Resolution order per option: CLI override, then the Actions-style
/// `INPUT_*` environment variable, then the default. Workspace root
/// comes from GITHUB_WORKSPACE; verbose is also enabled by
/// RUNNER_DEBUG=1.
///
/// # Arguments
/// * `overrides` - CLI-level overrides, highest precedence
pub fn load_config(overrides: &ConfigOverrides) -> RunConfig {
    let workspace_root = env::var("GITHUB_WORKSPACE")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let package_root = overrides
        .package_root
        .clone()
        .or_else(|| action_input("package_root"))
        .unwrap_or_default();

    let tag_prefix = overrides
        .tag_prefix
        .clone()
        .or_else(|| action_input("tag_prefix"))
        .unwrap_or_default();

    let tag_suffix = overrides
        .tag_suffix
        .clone()
        .or_else(|| action_input("tag_suffix"))
        .unwrap_or_default();

    let write_manifest = overrides.write_manifest
        || action_input("write_manifest")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    let verbose = overrides.verbose
        || env::var("RUNNER_DEBUG")
            .map(|v| v == "1")
            .unwrap_or(false);

    RunConfig {
        workspace_root,
        package_root,
        tag_prefix,
        tag_suffix,
        write_manifest,
        verbose,
    }
}

/// Reads the release-host credential from the environment.
///
/// Checked before any network call is attempted; an absent or empty
/// token is a precondition failure.
pub fn credential() -> Result<String> {
    env::var("GITHUB_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
        .ok_or(NextSemverError::MissingCredential)
}
