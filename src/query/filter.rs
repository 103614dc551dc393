//! Entry predicates for listing queries.

use crate::parser::LogEntry;
use chrono::NaiveDateTime;

/// Conjunction of optional predicates on an entry
///
/// `level` and `component` are exact, case-sensitive matches. The time bounds
/// are inclusive. An empty string for `level` or `component` means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub level: Option<String>,
    pub component: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(level) = non_empty(&self.level) {
            if entry.level != level {
                return false;
            }
        }
        if let Some(component) = non_empty(&self.component) {
            if entry.component != component {
                return false;
            }
        }
        if let Some(start) = self.start {
            if entry.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if entry.timestamp > end {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_timestamp;

    fn entry(ts: &str, level: &str, component: &str) -> LogEntry {
        LogEntry {
            log_id: String::new(),
            timestamp: parse_timestamp(ts).unwrap(),
            level: level.to_string(),
            component: component.to_string(),
            message: String::new(),
            source_file: "app.log".to_string(),
            line_number: 1,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(LogFilter::new().matches(&entry("2025-05-07 10:00:00", "INFO", "A")));
    }

    #[test]
    fn test_level_and_component_are_exact() {
        let e = entry("2025-05-07 10:00:00", "ERROR", "UserAuth");
        assert!(LogFilter::new().level("ERROR").matches(&e));
        assert!(!LogFilter::new().level("error").matches(&e));
        assert!(!LogFilter::new().level("ERR").matches(&e));
        assert!(LogFilter::new().component("UserAuth").matches(&e));
        assert!(!LogFilter::new().level("ERROR").component("Db").matches(&e));
    }

    #[test]
    fn test_empty_strings_do_not_filter() {
        let e = entry("2025-05-07 10:00:00", "INFO", "A");
        assert!(LogFilter::new().level("").component("").matches(&e));
    }

    #[test]
    fn test_time_bounds_are_inclusive() {
        let e = entry("2025-05-07 10:00:15", "INFO", "A");
        let at = parse_timestamp("2025-05-07 10:00:15").unwrap();
        let before = parse_timestamp("2025-05-07 10:00:14").unwrap();
        let after = parse_timestamp("2025-05-07 10:00:16").unwrap();

        assert!(LogFilter::new().start(at).end(at).matches(&e));
        assert!(LogFilter::new().start(before).end(after).matches(&e));
        assert!(!LogFilter::new().start(after).matches(&e));
        assert!(!LogFilter::new().end(before).matches(&e));
    }
}
