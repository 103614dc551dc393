//! Error types and handling infrastructure for logscope.
//!
//! Only caller-facing validation failures live here. Problems found while
//! scanning (malformed lines, files that vanish mid-scan) are absorbed into the
//! scan statistics or skipped, and never surface as a `LogscopeError`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for logscope operations.
#[derive(Error, Debug)]
pub enum LogscopeError {
    /// Timestamp string matched neither accepted layout
    #[error("Invalid timestamp format: {value:?}")]
    InvalidTimestamp { value: String },

    /// Limit or offset outside the allowed range
    #[error("Invalid pagination: {message}")]
    InvalidPagination { message: String },

    /// Start of a time window falls after its end
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidTimeRange { start: String, end: String },

    /// File-name glob could not be compiled
    #[error("Invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file could not be read or decoded
    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Standard Result type for logscope operations.
pub type Result<T> = std::result::Result<T, LogscopeError>;

impl LogscopeError {
    /// Create an InvalidTimestamp error for the offending input
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Create an InvalidPagination error with a descriptive message
    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination {
            message: message.into(),
        }
    }

    /// Create a Config error for the given file
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
