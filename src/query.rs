//! Query operations over a log directory.
//!
//! Every operation starts its own scan; nothing is cached between calls, so
//! results always reflect what is on disk at the time of the call.

pub mod engine;
pub mod filter;
pub mod pagination;

pub use engine::{LogPage, QueryEngine};
pub use filter::LogFilter;
pub use pagination::Pagination;
