//! The structured log record produced by a successful line parse.

use chrono::NaiveDateTime;
use serde::Serialize;

/// One successfully parsed log record
///
/// Entries only live for the duration of a scan. They are built by the line
/// parser, handed to whatever consumes the stream and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Lowercase hex SHA-1 of `source_file:line_number:raw_line`
    pub log_id: String,

    /// Second-precision instant, no timezone
    pub timestamp: NaiveDateTime,

    pub level: String,
    pub component: String,

    /// Free text; may contain literal tab characters
    pub message: String,

    /// Base name of the originating file
    pub source_file: String,

    /// 1-based line position within `source_file`
    pub line_number: u64,
}
