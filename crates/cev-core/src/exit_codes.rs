//! Exit codes for the cev-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. Ranges:
//! - 0: success
//! - 10-19: user/request errors (recoverable by fixing the request)
//! - 20-29: internal errors (bugs, should be reported)

use cev_common::Error;

/// Exit codes for cev-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean run with a payload on stdout.
    Success = 0,

    /// Invalid arguments or unparseable date range.
    ArgsError = 10,

    /// A precondition of the statistics engine was violated.
    AnalysisError = 11,

    /// Configuration file missing or invalid.
    ConfigError = 12,

    /// I/O or serialization failure.
    IoError = 21,

    /// Internal error (bug - please report).
    InternalError = 20,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidDateRange { .. } => ExitCode::ArgsError,
            Error::EmptyInput { .. } => ExitCode::AnalysisError,
            Error::Config(_) => ExitCode::ConfigError,
            Error::Io(_) | Error::Serialization(_) => ExitCode::IoError,
        }
    }
}
