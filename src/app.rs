//! Application orchestration layer
//!
//! Turns parsed command-line requests into query engine calls. Boundary
//! validation that the engine assumes has already happened (timestamp parsing,
//! `start <= end`, default page size) is done here.

use crate::cli::{Command, ListArgs};
use crate::config::QueryConfig;
use crate::error::{LogscopeError, Result};
use crate::parser::{format_timestamp, parse_timestamp, LogEntry, TimestampLayout};
use crate::query::{LogFilter, LogPage, QueryEngine};
use crate::source::StatsCounter;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Result of one command, ready to be rendered
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Page(LogPage),
    Entry(LogEntry),
    Stats(StatsCounter),
    Timestamp(String),
    /// Lookup found nothing; carries the id that was asked for
    #[serde(skip)]
    NotFound(String),
}

/// Application orchestrator
pub struct Application {
    engine: QueryEngine,
    default_limit: usize,
}

impl Application {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            engine: QueryEngine::from_config(config),
            default_limit: config.default_limit,
        }
    }

    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::List(args) => self.list(args).map(Outcome::Page),
            Command::Get { log_id } => Ok(match self.engine.get_log_by_id(&log_id)? {
                Some(entry) => Outcome::Entry(entry),
                None => Outcome::NotFound(log_id),
            }),
            Command::Stats => self.engine.get_stats().map(Outcome::Stats),
            Command::ParseTimestamp { value } => {
                let ts = parse_timestamp(&value)?;
                Ok(Outcome::Timestamp(format_timestamp(&ts, TimestampLayout::Iso)))
            }
        }
    }

    fn list(&self, args: ListArgs) -> Result<LogPage> {
        let (start, end) = parse_time_window(args.start.as_deref(), args.end.as_deref())?;
        let filter = LogFilter {
            level: args.level,
            component: args.component,
            start,
            end,
        };
        let limit = args
            .limit
            .unwrap_or_else(|| i64::try_from(self.default_limit).unwrap_or(i64::MAX));
        self.engine.list_logs(&filter, limit, args.offset.unwrap_or(0))
    }
}

/// Parse optional query bounds and reject a window that ends before it starts
pub fn parse_time_window(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<NaiveDateTime>, Option<NaiveDateTime>)> {
    let start = start.map(parse_timestamp).transpose()?;
    let end = end.map(parse_timestamp).transpose()?;

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(LogscopeError::InvalidTimeRange {
                start: format_timestamp(&s, TimestampLayout::Iso),
                end: format_timestamp(&e, TimestampLayout::Iso),
            });
        }
    }
    Ok((start, end))
}
