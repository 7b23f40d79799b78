//! Activity entries: one per command that changed state

use crate::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Record of a committed command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ULID, unique per entry
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// "verb noun", e.g. "move card"
    pub op: String,
    /// The command's own fields, serialized
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Time spent computing the successor state
    pub duration_us: u64,
}

impl LogEntry {
    pub fn new(op: impl Into<String>, input: Value, duration_us: u64) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            actor: None,
            duration_us,
        }
    }

    /// Build the entry for a command that took `elapsed` to execute.
    ///
    /// A command that cannot be serialized is recorded with a null input
    /// and a warning.
    pub fn for_operation<O>(op: &O, elapsed: Duration) -> Self
    where
        O: Operation + Serialize,
    {
        let input = match serde_json::to_value(op) {
            Ok(input) => input,
            Err(error) => {
                tracing::warn!(op = %op.op_string(), %error, "operation input not recorded");
                Value::Null
            }
        };
        let duration_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        Self::new(op.op_string(), input, duration_us)
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Value of one command field, e.g. `entry.field("title")`
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.input.get(name)
    }
}
