//! Timestamp parsing for log records and query bounds.
//!
//! Two layouts are accepted, tried in order:
//!
//! - `YYYY-MM-DD HH:MM:SS` (the layout written by the log producers)
//! - `YYYY-MM-DDTHH:MM:SS` (ISO-style, convenient for query parameters)
//!
//! Neither layout carries a timezone or fractional seconds. Month, day and
//! time fields may drop their leading zero; the year is always four digits.

use crate::error::{LogscopeError, Result};
use chrono::{NaiveDateTime, Timelike};
use std::ops::RangeInclusive;

const DATE_WIDTHS: [RangeInclusive<usize>; 3] = [4..=4, 1..=2, 1..=2];
const TIME_WIDTHS: [RangeInclusive<usize>; 3] = [1..=2, 1..=2, 1..=2];

/// Accepted textual layouts for a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampLayout {
    /// `2025-05-07 10:00:00`
    Space,
    /// `2025-05-07T10:00:00`
    Iso,
}

impl TimestampLayout {
    /// Layouts in the order they are attempted
    pub const ALL: [TimestampLayout; 2] = [TimestampLayout::Space, TimestampLayout::Iso];

    /// chrono format string for this layout
    pub fn format_str(self) -> &'static str {
        match self {
            TimestampLayout::Space => "%Y-%m-%d %H:%M:%S",
            TimestampLayout::Iso => "%Y-%m-%dT%H:%M:%S",
        }
    }

    fn separator(self) -> char {
        match self {
            TimestampLayout::Space => ' ',
            TimestampLayout::Iso => 'T',
        }
    }

    /// Parse `value` if it has exactly this layout's shape
    ///
    /// chrono by itself tolerates inner whitespace, a signed year and the leap
    /// second `60`.
    fn parse(self, value: &str) -> Option<NaiveDateTime> {
        let (date, time) = value.split_once(self.separator())?;
        if !digit_fields(date, '-', &DATE_WIDTHS) || !digit_fields(time, ':', &TIME_WIDTHS) {
            return None;
        }
        NaiveDateTime::parse_from_str(value, self.format_str())
            .ok()
            .filter(|ts| ts.nanosecond() < 1_000_000_000)
    }
}

/// True if `text` is `delim`-separated runs of ASCII digits with the given widths
fn digit_fields(text: &str, delim: char, widths: &[RangeInclusive<usize>]) -> bool {
    let mut fields = text.split(delim);
    let shaped = widths.iter().all(|width| {
        fields.next().is_some_and(|field| {
            width.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
        })
    });
    shaped && fields.next().is_none()
}

/// Parse a timestamp in either accepted layout
///
/// Surrounding whitespace is ignored. The error carries the trimmed input.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    TimestampLayout::ALL
        .iter()
        .find_map(|layout| layout.parse(value))
        .ok_or_else(|| LogscopeError::invalid_timestamp(value))
}

/// Render an instant in the given layout
pub fn format_timestamp(ts: &NaiveDateTime, layout: TimestampLayout) -> String {
    ts.format(layout.format_str()).to_string()
}
