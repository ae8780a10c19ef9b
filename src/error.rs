use thiserror::Error;

/// Unified error type for next-semver operations
#[derive(Error, Debug)]
pub enum NextSemverError {
    #[error("Invalid semver string: {0}")]
    InvalidVersion(String),

    #[error("Manifest error: {0}")]
    MissingManifest(String),

    #[error("Invalid or missing GITHUB_TOKEN.")]
    MissingCredential,

    #[error("Release host error: {0}")]
    ReleaseHost(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-semver
pub type Result<T> = std::result::Result<T, NextSemverError>;

impl NextSemverError {
    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        NextSemverError::InvalidVersion(msg.into())
    }

    /// Create a missing-manifest error with context
    pub fn missing_manifest(msg: impl Into<String>) -> Self {
        NextSemverError::MissingManifest(msg.into())
    }

    /// Create a release-host error with context
    pub fn release_host(msg: impl Into<String>) -> Self {
        NextSemverError::ReleaseHost(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextSemverError::Config(msg.into())
    }

    /// Create an output-sink error with context
    pub fn output(msg: impl Into<String>) -> Self {
        NextSemverError::Output(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NextSemverError::invalid_version("abc");
        assert_eq!(err.to_string(), "Invalid semver string: abc");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NextSemverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(NextSemverError::release_host("test")
            .to_string()
            .contains("Release host"));
        assert!(NextSemverError::missing_manifest("test")
            .to_string()
            .contains("Manifest"));
    }

    #[test]
    fn test_missing_credential_message() {
        let err = NextSemverError::MissingCredential;
        assert_eq!(err.to_string(), "Invalid or missing GITHUB_TOKEN.");
    }

    #[test]
    fn test_error_all_variants() {
        let errors = vec![
            NextSemverError::invalid_version("bad version"),
            NextSemverError::missing_manifest("no manifest"),
            NextSemverError::MissingCredential,
            NextSemverError::release_host("503"),
            NextSemverError::config("bad input"),
            NextSemverError::output("sink closed"),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (NextSemverError::invalid_version("x"), "Invalid semver"),
            (NextSemverError::missing_manifest("x"), "Manifest error"),
            (NextSemverError::release_host("x"), "Release host error"),
            (NextSemverError::config("x"), "Configuration error"),
            (NextSemverError::output("x"), "Output error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = NextSemverError::invalid_version(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Invalid semver"));
        }
    }
}
