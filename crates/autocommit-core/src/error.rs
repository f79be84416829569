//! Error types for autocommit with categorization:
//!
//! - **Validation errors**: input validation and configuration (exit code 1)
//! - **System errors**: IO and environment access (exit code 2)
//! - **Not found**: missing files or config keys (exit code 3)

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type that can represent any error in the system.
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid configuration provided
    InvalidConfig(String),
    /// Parse error when reading configuration or data
    ParseError(String),
    /// Validation failure for user input
    Validation(String),
    /// IO error from the filesystem or environment
    Io(String),
    /// A requested resource does not exist
    NotFound(String),
    /// Unknown error (fallback)
    Unknown(String),
}

// Convenience constructors using functional patterns
impl Error {
    /// Create a validation error from an invalid config.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a validation error from a parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a validation error from a validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a system error from an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create an error for a not found resource.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: User error (validation, invalid input, bad configuration)
    /// - 2: System error (IO, environment)
    /// - 3: Not found (files, config keys)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) | Self::ParseError(_) | Self::Validation(_) => 1,
            Self::Io(_) | Self::Unknown(_) => 2,
            Self::NotFound(_) => 3,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Unknown(msg) => write!(f, "Unknown error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::parse_error(format!("Failed to parse config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = Error::invalid_config("test error");
        assert_eq!(err.to_string(), "Invalid configuration: test error");
    }

    #[test]
    fn test_error_display_validation() {
        let err = Error::validation("bad input");
        assert_eq!(err.to_string(), "Validation error: bad input");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::not_found("config key 'x'");
        assert_eq!(err.to_string(), "Not found: config key 'x'");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not [ valid");
        let Err(toml_err) = parse else {
            panic!("expected parse failure");
        };
        let err = Error::from(toml_err);
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn test_exit_code_user_errors() {
        // User errors should exit with code 1
        assert_eq!(Error::validation("test").exit_code(), 1);
        assert_eq!(Error::invalid_config("test").exit_code(), 1);
        assert_eq!(Error::parse_error("test").exit_code(), 1);
    }

    #[test]
    fn test_exit_code_system_errors() {
        // System errors should exit with code 2
        assert_eq!(Error::io_error("test").exit_code(), 2);
        assert_eq!(Error::unknown("test").exit_code(), 2);
    }

    #[test]
    fn test_exit_code_not_found() {
        assert_eq!(Error::not_found("key").exit_code(), 3);
    }

    #[test]
    fn test_error_debug() {
        let err = Error::invalid_config("test");
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("InvalidConfig"));
    }
}
