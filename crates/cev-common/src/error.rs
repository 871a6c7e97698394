//! Error types for the correlation engine.
//!
//! Errors carry a stable numeric code and a category so the CLI boundary
//! can translate them into structured failures without parsing messages.
//!
//! Error code ranges:
//! - 10-19: request/user errors (bad dates, empty inputs)
//! - 20-29: internal errors (I/O, serialization)

use thiserror::Error;

/// Result type alias for correlator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed request input (dates, filters).
    Request,
    /// Precondition violations inside the statistics engine.
    Analysis,
    /// Configuration loading or validation errors.
    Config,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Request => write!(f, "request"),
            ErrorCategory::Analysis => write!(f, "analysis"),
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Which event family an analysis precondition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSide {
    Cosmic,
    Evolutionary,
}

impl std::fmt::Display for EventSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventSide::Cosmic => write!(f, "cosmic"),
            EventSide::Evolutionary => write!(f, "evolutionary"),
        }
    }
}

/// Errors raised by the correlation engine and its boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A date string could not be parsed or the range is inverted.
    #[error("invalid date range: {input}: {reason}")]
    InvalidDateRange { input: String, reason: String },

    /// Cross-correlation was invoked with an empty event list.
    ///
    /// Computing the global min/max timestamp over an empty list is
    /// undefined, so this fails fast instead of producing garbage.
    #[error("cross-correlation requires at least one {side} event")]
    EmptyInput { side: EventSide },

    /// Configuration loading or validation failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Stable numeric code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidDateRange { .. } => 10,
            Error::EmptyInput { .. } => 11,
            Error::Config(_) => 12,
            Error::Io(_) => 21,
            Error::Serialization(_) => 22,
        }
    }

    /// Category for grouping in logs and failure payloads.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidDateRange { .. } => ErrorCategory::Request,
            Error::EmptyInput { .. } => ErrorCategory::Analysis,
            Error::Config(_) => ErrorCategory::Config,
            Error::Io(_) | Error::Serialization(_) => ErrorCategory::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = Error::EmptyInput {
            side: EventSide::Cosmic,
        };
        assert_eq!(err.code(), 11);
        assert_eq!(err.category(), ErrorCategory::Analysis);
        assert!(err.to_string().contains("cosmic"));
    }

    #[test]
    fn invalid_range_is_a_request_error() {
        let err = Error::InvalidDateRange {
            input: "not-a-date".into(),
            reason: "unparseable".into(),
        };
        assert_eq!(err.code(), 10);
        assert_eq!(err.category().to_string(), "request");
    }
}
