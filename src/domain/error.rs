//! Error types for the user directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Three variants form the *remote* class ([`DirectoryError::is_remote`]): transport
//! failures, non-success HTTP statuses, and response bodies that do not decode. The
//! session controller converts every remote error into its `Error` status instead of
//! propagating it.

use thiserror::Error;

/// The main error type for user directory operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use userdir::DirectoryError;
///
/// fn validate_limit(limit: u32) -> Result<(), DirectoryError> {
///     if limit == 0 {
///         return Err(DirectoryError::Config("page_limit must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_limit(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced a response.
    ///
    /// Connection refused, DNS failure, timeout, or an interrupted body read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success HTTP status.
    #[error("API error: {status} for {url}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Request URL, for log correlation.
        url: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid or unreadable.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectoryError {
    /// Returns `true` for failures that originate at the remote service boundary.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

/// A specialized `Result` type for user directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_decode_errors_are_remote() {
        let status = DirectoryError::Status {
            status: 503,
            url: "https://dummyjson.com/users".to_string(),
        };
        assert!(status.is_remote());
        assert_eq!(
            status.to_string(),
            "API error: 503 for https://dummyjson.com/users"
        );

        let decode = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(DirectoryError::from(decode).is_remote());
    }

    #[test]
    fn config_errors_are_local() {
        assert!(!DirectoryError::Config("bad".to_string()).is_remote());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!DirectoryError::from(io).is_remote());
    }
}
