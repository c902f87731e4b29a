// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Every failure degrades to a visible, recoverable UI state: validation
/// errors stay on the form, network and server errors surface as dismissable
/// notifications, config errors fall back to defaults. Nothing here is fatal
/// to the process and nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field-scoped validation failure. Carries the Fluent key of the
    /// rejection message; never reaches the network.
    Validation(String),

    /// Submission was attempted before the image host upload finished.
    MissingUpload,

    /// Transport-level failure (DNS, connect, timeout, body read).
    Network(String),

    /// The server answered with a non-success HTTP status.
    Server(u16),

    /// Configuration could not be read or written.
    Config(String),

    /// Filesystem error.
    Io(String),
}

impl Error {
    /// Returns the i18n message key for this error, used when the error is
    /// surfaced as a toast notification.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Validation(_) => "notification-validation-failed",
            Error::MissingUpload => "notification-missing-upload",
            Error::Network(_) => "error-network",
            Error::Server(_) => "error-server",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(key) => write!(f, "Validation failed: {}", key),
            Error::MissingUpload => write!(f, "No uploaded image URL is available"),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Server(status) => write!(f, "Server Error: HTTP {}", status),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Server(status.as_u16()),
            None => Error::Network(err.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_network_error() {
        let err = Error::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network Error: connection refused");
    }

    #[test]
    fn display_formats_server_error_with_status() {
        let err = Error::Server(503);
        assert_eq!(format!("{}", err), "Server Error: HTTP 503");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn missing_upload_has_dedicated_i18n_key() {
        assert_eq!(
            Error::MissingUpload.i18n_key(),
            "notification-missing-upload"
        );
    }

    #[test]
    fn network_and_server_errors_use_distinct_keys() {
        assert_ne!(
            Error::Network(String::new()).i18n_key(),
            Error::Server(500).i18n_key()
        );
    }
}
