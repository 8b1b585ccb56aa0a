//! Log entry structure

use super::log_level::LogLevel;
use super::metadata::{FieldValue, Metadata, LABEL_KEY};
use chrono::{DateTime, Utc};

/// A single log record as seen by formatters
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Explicit event time; `None` lets the formatter use the current time
    pub timestamp: Option<DateTime<Utc>>,
    pub metadata: Metadata,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: None,
            metadata: Metadata::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Insert the level's default label unless a label entry already exists.
    ///
    /// An explicit label, including an empty one, is never replaced.
    pub fn apply_default_label(&mut self) {
        if self.metadata.contains_key(LABEL_KEY) {
            return;
        }
        if let Some(label) = self.level.default_label() {
            self.metadata.insert(LABEL_KEY, label);
        }
    }

    /// Strip one trailing line break from the message
    pub fn trim_message(&mut self) {
        let trimmed_len = trim_trailing_newline(&self.message).len();
        self.message.truncate(trimmed_len);
    }
}

/// Remove exactly one trailing `"\n"` or `"\r\n"`
pub fn trim_trailing_newline(message: &str) -> &str {
    message
        .strip_suffix("\r\n")
        .or_else(|| message.strip_suffix('\n'))
        .unwrap_or(message)
}
