//! Validated limit/offset windows.

use crate::error::{LogscopeError, Result};

/// A window `[offset, offset + limit)` over the ranks of matching entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: usize,
    offset: usize,
}

impl Pagination {
    /// Validate raw caller input against `max_limit`
    ///
    /// Signed inputs are accepted so that negative values coming from a caller
    /// are reported as `InvalidPagination` rather than failing to convert.
    pub fn new(limit: i64, offset: i64, max_limit: usize) -> Result<Self> {
        if limit <= 0 {
            return Err(LogscopeError::invalid_pagination("limit must be > 0"));
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        if limit > max_limit {
            return Err(LogscopeError::invalid_pagination(format!(
                "limit must be <= {max_limit}"
            )));
        }
        if offset < 0 {
            return Err(LogscopeError::invalid_pagination("offset must be >= 0"));
        }
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);

        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the 0-based match `rank` falls inside this window
    pub fn contains(&self, rank: usize) -> bool {
        rank >= self.offset && rank - self.offset < self.limit
    }
}
