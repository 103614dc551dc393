//! Entry stream with running statistics.

use crate::error::Result;
use crate::parser::{LogEntry, ParsedLine};
use crate::source::reader::LineSource;
use crate::source::stats::StatsCounter;
use std::path::Path;

/// Lazy sequence of entries that counts what it passes over
///
/// Wraps any iterator of classified lines. Each call to `next` pulls lines
/// until it reaches an entry, recording every entry and every invalid line in
/// the [`StatsCounter`] on the way. Stopping early leaves the counter partial.
pub struct LogStream<I = LineSource> {
    lines: I,
    stats: StatsCounter,
}

impl LogStream<LineSource> {
    /// Start a fresh scan of the files in `dir` matching `pattern`
    pub fn open(dir: &Path, pattern: &str) -> Result<Self> {
        Ok(Self::new(LineSource::open(dir, pattern)?))
    }
}

impl<I> LogStream<I>
where
    I: Iterator<Item = ParsedLine>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            stats: StatsCounter::new(),
        }
    }

    /// Counts for the portion of the scan consumed so far
    pub fn stats(&self) -> &StatsCounter {
        &self.stats
    }

    pub fn into_stats(self) -> StatsCounter {
        self.stats
    }

    /// Consume the rest of the scan and return the final counts
    pub fn drain(mut self) -> StatsCounter {
        self.by_ref().for_each(drop);
        self.stats
    }
}

impl<I> Iterator for LogStream<I>
where
    I: Iterator<Item = ParsedLine>,
{
    type Item = LogEntry;

    fn next(&mut self) -> Option<LogEntry> {
        loop {
            match self.lines.next()? {
                ParsedLine::Entry(entry) => {
                    self.stats.record_entry(&entry);
                    return Some(entry);
                }
                ParsedLine::Invalid(_) => self.stats.record_invalid(),
                ParsedLine::Empty | ParsedLine::Header => {}
            }
        }
    }
}
