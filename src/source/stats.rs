//! Aggregate counters maintained while a scan is consumed.

use crate::parser::LogEntry;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Label counts that remember the order in which labels were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl LabelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `label`
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.index.get(label).map(|&slot| self.counts[slot].1)
    }

    /// Labels and counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Serialize for LabelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, count) in &self.counts {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Totals for one scan
///
/// Owned by the stream that fills it. Counts only cover the part of the scan
/// that has been consumed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StatsCounter {
    pub total_entries: u64,
    /// Malformed lines; blank lines and headers are not counted
    pub invalid_lines: u64,
    pub by_level: LabelCounts,
    pub by_component: LabelCounts,
}

impl StatsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_entry(&mut self, entry: &LogEntry) {
        self.total_entries += 1;
        self.by_level.increment(&entry.level);
        self.by_component.increment(&entry.component);
    }

    pub fn record_invalid(&mut self) {
        self.invalid_lines += 1;
    }
}
