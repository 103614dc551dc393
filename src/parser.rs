//! Line-level parsing for tab-delimited log files.
//!
//! This module turns raw text lines into structured [`LogEntry`] values or
//! classified non-entries. It is pure: nothing here touches the file system.
//!
//! - [`timestamp`] - the two accepted timestamp layouts
//! - [`line`] - classification of a single raw line
//! - [`fingerprint`] - deterministic, content-derived entry ids

pub mod entry;
pub mod fingerprint;
pub mod line;
pub mod timestamp;

pub use entry::LogEntry;
pub use fingerprint::make_log_id;
pub use line::{parse_line, LineError, ParsedLine, HEADER};
pub use timestamp::{format_timestamp, parse_timestamp, TimestampLayout};
