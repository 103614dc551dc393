//! # logscope - Query Engine for Tab-Delimited Log Directories
//!
//! A read-only query interface over a directory of log files whose lines look
//! like `Timestamp<TAB>Level<TAB>Component<TAB>Message`.
//!
//! ## Features
//!
//! - **Streaming scans**: files are read lazily, one line at a time, in a fixed order
//! - **Stable ids**: every entry gets a SHA-1 fingerprint of its file, line number and text
//! - **Filtered pagination**: level, component and inclusive time bounds, with a full match count
//! - **Statistics**: entry counts by level and component plus a count of malformed lines
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`parser`] - Timestamp, line and fingerprint parsing
//! - [`source`] - File discovery and the counting entry stream
//! - [`query`] - Listing, lookup and statistics operations
//! - [`config`] - Layered process settings
//! - [`app`] / [`cli`] - Command-line boundary
//!
//! No state survives between queries: each one rescans the directory.

pub mod error;

pub mod parser;
pub mod query;
pub mod source;

pub mod app;
pub mod cli;
pub mod config;

pub use error::{LogscopeError, Result};

pub use config::QueryConfig;
pub use parser::{parse_timestamp, LogEntry};
pub use query::{LogFilter, LogPage, QueryEngine};
pub use source::{LogStream, StatsCounter};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
