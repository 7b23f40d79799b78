//! In-memory activity log: one entry per state change, newest first

use kanban_operations::LogEntry;
use std::collections::VecDeque;

/// Bounded history of the operations that changed the store
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    limit: usize,
}

impl ActivityLog {
    /// Create a log that keeps at most `limit` entries
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Record an entry, evicting the oldest when full
    pub fn push(&mut self, entry: LogEntry) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_newest_first_and_bounded() {
        let mut log = ActivityLog::new(2);
        log.push(LogEntry::new("create board", json!({}), 0));
        log.push(LogEntry::new("create column", json!({}), 0));
        log.push(LogEntry::new("create card", json!({}), 0));

        let ops: Vec<&str> = log.entries().map(|e| e.op.as_str()).collect();
        assert_eq!(ops, vec!["create card", "create column"]);
        assert_eq!(log.latest().unwrap().op, "create card");
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut log = ActivityLog::new(0);
        log.push(LogEntry::new("create board", json!({}), 0));
        assert!(log.is_empty());
    }
}
