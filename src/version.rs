use semver::Version;

use crate::error::{NextSemverError, Result};

/// Version substituted when the repository has no published releases yet.
pub fn default_version() -> Version {
    Version::new(0, 0, 0)
}

/// Parses and validates a semantic version string.
///
/// Accepts the usual leniencies: surrounding whitespace and a leading
/// 'v' or 'V' are ignored. Anything that does not parse as a semantic
/// version after that is an error, never silently defaulted.
///
/// # Arguments
/// * `raw` - Version string to clean (e.g., "v1.2.3", " 1.2.3-rc.1 ")
///
/// # Returns
/// * `Ok(Version)` - The validated version
/// * `Err(InvalidVersion)` - If the string is empty or malformed
///
/// # Example
/// ```
/// use next_semver::version::clean;
///
/// assert_eq!(clean("v1.2.3").unwrap().to_string(), "1.2.3");
/// assert!(clean("abc").is_err());
/// ```
pub fn clean(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    Version::parse(bare).map_err(|_| NextSemverError::invalid_version(raw))
}

/// Computes the next release version from the declared manifest version
/// and the latest published release version.
///
/// The declared version is the engineer's intent for the next release.
/// If a release already exists at or above it, the result must still be
/// strictly greater than what was last released, so the latest release
/// gets a patch bump (prerelease and build metadata cleared). Otherwise
/// the declared version is used unchanged, prerelease and build intact.
///
/// # Arguments
/// * `declared` - Version declared in the manifest
/// * `latest` - Latest published release version (default 0.0.0 when none)
///
/// # Returns
/// The resolved next version
///
/// # Example
/// ```
/// use next_semver::version::{clean, resolve_next};
///
/// let declared = clean("1.0.0").unwrap();
/// let latest = clean("1.0.0").unwrap();
/// assert_eq!(resolve_next(&declared, &latest).to_string(), "1.0.1");
/// ```
pub fn resolve_next(declared: &Version, latest: &Version) -> Version {
    if latest >= declared {
        Version::new(latest.major, latest.minor, latest.patch + 1)
    } else {
        declared.clone()
    }
}
