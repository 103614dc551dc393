//! The three query operations: filtered listing, lookup by id and statistics.

use crate::config::QueryConfig;
use crate::error::Result;
use crate::parser::LogEntry;
use crate::query::filter::LogFilter;
use crate::query::pagination::Pagination;
use crate::source::{LogStream, StatsCounter};
use log::debug;
use serde::Serialize;
use std::path::PathBuf;

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPage {
    /// Every match of the filter, not just the ones on this page
    pub total_matched: usize,
    pub limit: usize,
    pub offset: usize,
    pub items: Vec<LogEntry>,
}

/// Runs queries against one log directory
///
/// The engine holds only its parameters. Each call re-enumerates and re-reads
/// the files, so concurrent or repeated calls never share scan state.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    log_dir: PathBuf,
    file_glob: String,
    max_limit: usize,
}

impl QueryEngine {
    pub fn new(log_dir: impl Into<PathBuf>, file_glob: impl Into<String>, max_limit: usize) -> Self {
        Self {
            log_dir: log_dir.into(),
            file_glob: file_glob.into(),
            max_limit,
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(&config.log_dir, &config.file_glob, config.max_limit)
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    fn scan(&self) -> Result<LogStream> {
        LogStream::open(&self.log_dir, &self.file_glob)
    }

    /// List the entries matching `filter`, windowed by `limit` and `offset`
    ///
    /// # Errors
    ///
    /// `InvalidPagination` unless `0 < limit <= max_limit` and `offset >= 0`;
    /// `InvalidPattern` if the configured glob is malformed.
    pub fn list_logs(&self, filter: &LogFilter, limit: i64, offset: i64) -> Result<LogPage> {
        let window = Pagination::new(limit, offset, self.max_limit)?;

        let mut total_matched = 0;
        let mut items = Vec::new();
        for entry in self.scan()?.filter(|entry| filter.matches(entry)) {
            if window.contains(total_matched) {
                items.push(entry);
            }
            total_matched += 1;
        }

        debug!(
            "listed {} of {total_matched} matching entries (offset {})",
            items.len(),
            window.offset()
        );
        Ok(LogPage {
            total_matched,
            limit: window.limit(),
            offset: window.offset(),
            items,
        })
    }

    /// Find the entry whose id is `log_id`, stopping at the first hit
    ///
    /// Absence is reported as `Ok(None)`.
    pub fn get_log_by_id(&self, log_id: &str) -> Result<Option<LogEntry>> {
        let found = self.scan()?.find(|entry| entry.log_id == log_id);
        if found.is_none() {
            debug!("no entry with id {log_id}");
        }
        Ok(found)
    }

    /// Read every file to the end and return the scan totals
    pub fn get_stats(&self) -> Result<StatsCounter> {
        Ok(self.scan()?.drain())
    }
}
