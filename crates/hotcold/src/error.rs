//! Application error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Source position where an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}:{}", file, line)]
pub struct Location {
    /// Source file where error occurred.
    pub file: &'static str,
    /// Line number where error occurred.
    pub line: u32,
}

impl Location {
    /// Captures the location of the (tracked) caller.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

/// Result log read/write failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Result log error: {} at {}", message, location)]
pub struct ResultLogError {
    /// Error message.
    pub message: String,
    /// Where the error was raised.
    pub location: Location,
}

impl ResultLogError {
    /// Creates a new result log error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

impl From<std::io::Error> for ResultLogError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ResultLogError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Unrecoverable terminal failure: input closed or output unwritable.
#[derive(Debug, Clone, Display, Error)]
#[display("Terminal error: {} at {}", message, location)]
pub struct BoundaryError {
    /// Error message.
    pub message: String,
    /// Where the error was raised.
    pub location: Location,
}

impl BoundaryError {
    /// Creates a new boundary error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

impl From<std::io::Error> for BoundaryError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Rejected line of player input. Always recoverable by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// The line is not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// The line is a number but not one of the accepted answers.
    #[display("{} is not one of the offered choices", _0)]
    NotAChoice(i64),
}

impl std::error::Error for InputError {}
