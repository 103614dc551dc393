//! Log directory scanning.
//!
//! A scan is built from two independent layers:
//!
//! - [`LineSource`] walks the matching files in order and yields every physical
//!   line as a [`ParsedLine`](crate::parser::ParsedLine), benign or not
//! - [`LogStream`] wraps any such line iterator, forwards only entries and keeps
//!   a [`StatsCounter`] up to date as a side channel
//!
//! Both are lazy: nothing is read until the consumer asks for the next item,
//! and at most one file handle is open at any time.

pub mod files;
pub mod reader;
pub mod stats;
pub mod stream;

pub use files::list_log_files;
pub use reader::LineSource;
pub use stats::{LabelCounts, StatsCounter};
pub use stream::LogStream;
