//! Classification of a single raw log line.
//!
//! Every physical line ends up in exactly one [`ParsedLine`] bucket. Blank
//! lines and the column header are benign and ignored by the statistics; the
//! [`LineError`] cases are what a scan reports as invalid lines.

use super::entry::LogEntry;
use super::fingerprint::make_log_id;
use super::timestamp::parse_timestamp;
use memchr::memchr_iter;
use std::fmt;

/// Column header some producers write as the first line of a file
pub const HEADER: &str = "Timestamp\tLevel\tComponent\tMessage";

/// Number of tab-separated columns in a record
const COLUMNS: usize = 4;

/// Why a non-blank, non-header line could not become an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Fewer than four tab-separated columns
    BadColumns { found: usize },
    /// First column is not a timestamp in an accepted layout
    InvalidTimestamp { value: String },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::BadColumns { found } => {
                write!(f, "bad_columns: expected {COLUMNS}, found {found}")
            }
            LineError::InvalidTimestamp { value } => {
                write!(f, "Invalid timestamp format: {value:?}")
            }
        }
    }
}

/// Outcome of parsing one raw line
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Entry(LogEntry),
    /// Empty or whitespace-only
    Empty,
    /// The literal column header
    Header,
    Invalid(LineError),
}

impl ParsedLine {
    /// True only for lines that count towards `invalid_lines`
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParsedLine::Invalid(_))
    }

    pub fn into_entry(self) -> Option<LogEntry> {
        match self {
            ParsedLine::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Parse one raw line read from `source_file` at 1-based `line_number`
///
/// A trailing line terminator (`\n` or `\r\n`) is stripped first; the stripped
/// text is what the entry id is derived from. The message column absorbs any
/// tabs beyond the third, so messages may contain tabs.
pub fn parse_line(raw_line: &str, source_file: &str, line_number: u64) -> ParsedLine {
    let line = strip_terminator(raw_line);
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ParsedLine::Empty;
    }
    if trimmed == HEADER {
        return ParsedLine::Header;
    }

    let Some([ts, level, component, message]) = split_columns(line) else {
        let found = memchr_iter(b'\t', line.as_bytes()).count() + 1;
        return ParsedLine::Invalid(LineError::BadColumns { found });
    };

    let ts = ts.trim();
    let timestamp = match parse_timestamp(ts) {
        Ok(timestamp) => timestamp,
        Err(_) => {
            return ParsedLine::Invalid(LineError::InvalidTimestamp {
                value: ts.to_string(),
            })
        }
    };

    ParsedLine::Entry(LogEntry {
        log_id: make_log_id(source_file, line_number, line),
        timestamp,
        level: level.trim().to_string(),
        component: component.trim().to_string(),
        message: message.trim().to_string(),
        source_file: source_file.to_string(),
        line_number,
    })
}

fn strip_terminator(raw_line: &str) -> &str {
    match raw_line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => raw_line,
    }
}

/// Split on the first three tabs; `None` when there are fewer than three
fn split_columns(line: &str) -> Option<[&str; COLUMNS]> {
    let mut tabs = memchr_iter(b'\t', line.as_bytes());
    let first = tabs.next()?;
    let second = tabs.next()?;
    let third = tabs.next()?;

    // Tab is ASCII, so every split index is a char boundary
    Some([
        &line[..first],
        &line[first + 1..second],
        &line[second + 1..third],
        &line[third + 1..],
    ])
}
