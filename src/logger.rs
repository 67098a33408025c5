//! In-memory session log
//!
//! Collects leveled entries, most of them tied to a task id, for the
//! on-screen session log view (Ctrl+G). Operational diagnostics additionally
//! go through the `log` facade to the file logger configured in `main`.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::tracker::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// One session log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub level: LogLevel,
    pub task: Option<TaskId>,
    pub message: String,
}

impl LogEntry {
    /// Render the entry as a single display line.
    #[must_use]
    pub fn line(&self) -> String {
        let timestamp = self.at.format("%H:%M:%S%.3f");
        match self.task {
            Some(id) => format!("[{timestamp}] [{}] {}", id.short(), self.message),
            None => format!("[{timestamp}] {}", self.message),
        }
    }
}

/// Shared session log; clones write to the same backing store.
#[derive(Clone, Default)]
pub struct SessionLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl SessionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session-level note, e.g. the configured endpoint.
    pub fn info(&self, message: impl Into<String>) {
        self.push(LogLevel::Info, None, message.into());
    }

    /// Record progress for one task.
    pub fn task_info(&self, id: TaskId, message: impl Into<String>) {
        self.push(LogLevel::Info, Some(id), message.into());
    }

    /// Record a failure for one task.
    pub fn task_error(&self, id: TaskId, message: impl Into<String>) {
        self.push(LogLevel::Error, Some(id), message.into());
    }

    fn push(&self, level: LogLevel, task: Option<TaskId>, message: String) {
        let entry = LogEntry {
            at: Utc::now(),
            level,
            task,
            message,
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// All entries, newest first, for the overlay.
    #[must_use]
    pub fn recent(&self) -> Vec<LogEntry> {
        if let Ok(entries) = self.entries.lock() {
            let mut recent = entries.clone();
            recent.reverse();
            recent
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_come_back_newest_first() {
        let log = SessionLog::new();
        log.info("first");
        log.info("second");

        let entries = log.recent();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "second");
        assert_eq!(entries[1].message, "first");
    }

    #[test]
    fn task_entries_carry_the_short_id() {
        let log = SessionLog::new();
        let id = TaskId::new();
        log.task_error(id, "network error");

        let entries = log.recent();
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(entries[0].task, Some(id));
        assert!(entries[0].line().contains(&id.short()));
        assert!(entries[0].line().ends_with("network error"));
    }

    #[test]
    fn clones_share_the_same_log() {
        let log = SessionLog::new();
        let clone = log.clone();
        clone.task_info(TaskId::new(), "completed");
        assert_eq!(log.recent().len(), 1);
    }
}
