//! LogState - Bounded Record of Composition Outcomes

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::theme::colors::Palette;

/// Severity of a log record, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => Palette::success(),
            LogLevel::Warn => Palette::warning(),
            LogLevel::Error => Palette::danger(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub seq: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Ring buffer of log records; the oldest record goes first when full
#[derive(Debug)]
pub struct LogState {
    records: VecDeque<LogEntry>,
    capacity: usize,
    seq: u64,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            seq: 0,
        }
    }

    pub fn record(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.seq += 1;
        self.records.push_back(LogEntry {
            seq: self.seq,
            level,
            message: message.into(),
            timestamp,
        });
    }

    /// Record `message` stamped with the current local time
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.record(level, message, Local::now());
    }

    /// Newest records first, at or above `min_level`
    pub fn newest(&self, min_level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.records
            .iter()
            .rev()
            .filter(move |entry| entry.level >= min_level)
    }

    /// Number of records at exactly `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.records.iter().filter(|entry| entry.level == level).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_buffer_drops_oldest() {
        let mut logs = LogState::new(2);
        logs.push_now(LogLevel::Info, "one");
        logs.push_now(LogLevel::Warn, "two");
        logs.push_now(LogLevel::Error, "three");

        let newest: Vec<_> = logs.newest(LogLevel::Info).map(|e| e.message.as_str()).collect();
        assert_eq!(newest, ["three", "two"]);
        assert_eq!(logs.newest(LogLevel::Info).next().map(|e| e.seq), Some(3));
    }

    #[test]
    fn test_level_filter_and_counts() {
        let mut logs = LogState::default();
        logs.push_now(LogLevel::Info, "composed pages/");
        logs.push_now(LogLevel::Error, "composing broken/ failed");
        logs.push_now(LogLevel::Warn, "reloading");

        let severe: Vec<_> = logs.newest(LogLevel::Warn).map(|e| e.level).collect();
        assert_eq!(severe, [LogLevel::Warn, LogLevel::Error]);
        assert_eq!(logs.count(LogLevel::Error), 1);
        assert_eq!(logs.count(LogLevel::Info), 1);
    }

    #[test]
    fn test_clear() {
        let mut logs = LogState::default();
        logs.push_now(LogLevel::Info, "loaded");
        assert_eq!(logs.len(), 1);
        logs.clear();
        assert!(logs.is_empty());
    }
}
