//! JSON formatter implementation
//!
//! Emits one JSON object per entry, for example
//! `{"level":"info","message":"started","port":8080,"timestamp":"..."}`.

use crate::core::{Formatter, LogEntry, Result, TimestampFormat};
use chrono::Utc;

/// Machine-readable formatter
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    include_timestamp: bool,
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            include_timestamp: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let mut json_obj = serde_json::Map::new();

        // Fields first so the fixed keys below win on collision
        for (key, value) in &entry.metadata {
            if key.is_empty() {
                continue;
            }
            json_obj.insert(key.clone(), value.to_json_value());
        }

        if self.include_timestamp {
            let timestamp = entry.timestamp.unwrap_or_else(Utc::now);
            let rendered = self.timestamp_format.format(&timestamp)?;
            let value = if self.timestamp_format.is_numeric() {
                rendered
                    .parse::<i64>()
                    .map(serde_json::Value::from)
                    .unwrap_or(serde_json::Value::String(rendered))
            } else {
                serde_json::Value::String(rendered)
            };
            json_obj.insert("timestamp".to_string(), value);
        }

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        Ok(serde_json::to_vec(&serde_json::Value::Object(json_obj))?)
    }
}
