use semver::Version;

/// Strips a configured prefix and suffix from a release tag.
///
/// At most one leading occurrence of `prefix` and one trailing occurrence
/// of `suffix` are removed (prefix first). Empty prefix/suffix and
/// non-matching tags leave the input unchanged.
///
/// # Arguments
/// * `tag` - Raw tag name from the release host (e.g., "v1.2.3-rc")
/// * `prefix` - Configured tag prefix ("" to disable)
/// * `suffix` - Configured tag suffix ("" to disable)
///
/// # Example
/// ```
/// use next_semver::tag::normalize;
///
/// assert_eq!(normalize("v1.2.3", "v", ""), "1.2.3");
/// assert_eq!(normalize("1.2.3-rc", "", "-rc"), "1.2.3");
/// ```
pub fn normalize(tag: &str, prefix: &str, suffix: &str) -> String {
    let mut result = tag;

    if !prefix.is_empty() {
        if let Some(stripped) = result.strip_prefix(prefix) {
            result = stripped;
        }
    }

    if !suffix.is_empty() {
        if let Some(stripped) = result.strip_suffix(suffix) {
            result = stripped;
        }
    }

    result.to_string()
}

/// Formats a resolved version into the final tag string.
///
/// Produces `"{prefix}{version}{suffix}"` for consumption by the
/// calling pipeline.
pub fn format_tag(version: &Version, prefix: &str, suffix: &str) -> String {
    format!("{}{}{}", prefix, version, suffix)
}
