//! Console formatter implementation
//!
//! Renders an entry as
//!
//! ```text
//! <timestamp> [<label>] <message> key=value key=value
//!
//! <error detail>
//! ```
//!
//! where every part except the message is optional.

use super::colorizer::{Colorizer, NoOpColorizer};
use crate::core::{
    FieldValue, Formatter, LogEntry, Result, TimestampFormat, ERROR_KEY, LABEL_KEY,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

fn default_colorizer() -> Arc<dyn Colorizer> {
    Arc::new(NoOpColorizer)
}

/// Configuration for [`ConsoleFormatter`]
///
/// # Examples
///
/// ```
/// use rust_console_logger::formatters::ConsoleFormatterConfig;
/// use rust_console_logger::TimestampFormat;
///
/// let config = ConsoleFormatterConfig::new()
///     .with_timestamp(false)
///     .with_timestamp_format(TimestampFormat::Iso8601)
///     .with_colorize(false);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleFormatterConfig {
    /// Prefix each line with a timestamp
    pub include_timestamp: bool,
    pub timestamp_format: TimestampFormat,
    /// Render the `label` entry as `[label]`
    pub include_label: bool,
    /// Pass the label through the colorizer
    pub colorize: bool,
    #[serde(skip, default = "default_colorizer")]
    pub colorizer: Arc<dyn Colorizer>,
    /// Reserved, currently has no effect
    pub pretty_print: bool,
}

impl Default for ConsoleFormatterConfig {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            timestamp_format: TimestampFormat::default(),
            include_label: true,
            colorize: true,
            colorizer: default_colorizer(),
            pretty_print: false,
        }
    }
}

impl fmt::Debug for ConsoleFormatterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleFormatterConfig")
            .field("include_timestamp", &self.include_timestamp)
            .field("timestamp_format", &self.timestamp_format)
            .field("include_label", &self.include_label)
            .field("colorize", &self.colorize)
            .field("pretty_print", &self.pretty_print)
            .finish_non_exhaustive()
    }
}

impl ConsoleFormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_label(mut self, include: bool) -> Self {
        self.include_label = include;
        self
    }

    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    #[must_use]
    pub fn with_colorizer<C: Colorizer + 'static>(mut self, colorizer: C) -> Self {
        self.colorizer = Arc::new(colorizer);
        self
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }
}

/// Human-readable single-entry formatter
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    config: ConsoleFormatterConfig,
}

impl ConsoleFormatter {
    pub fn new(config: ConsoleFormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsoleFormatterConfig {
        &self.config
    }

    fn estimated_size(&self, entry: &LogEntry) -> usize {
        let mut size = entry.message.len() + 50;
        if self.config.include_timestamp {
            size += 25;
        }
        if self.config.include_label {
            size += 10;
        }
        size
    }

    fn write_label(&self, out: &mut String, entry: &LogEntry) {
        if !self.config.include_label {
            return;
        }
        let label = match entry.metadata.label() {
            Some(label) if !label.is_empty() => label,
            _ => return,
        };

        out.push('[');
        if self.config.colorize {
            out.push_str(&self.config.colorizer.colorize(label, entry.level));
        } else {
            out.push_str(label);
        }
        out.push_str("] ");
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let mut out = String::with_capacity(self.estimated_size(entry));

        if self.config.include_timestamp {
            let timestamp = entry.timestamp.unwrap_or_else(Utc::now);
            self.config.timestamp_format.write_to(&mut out, &timestamp)?;
            out.push(' ');
        }

        self.write_label(&mut out, entry);

        out.push_str(&entry.message);

        for (key, value) in &entry.metadata {
            if key.is_empty() || key == LABEL_KEY || key == ERROR_KEY || value.is_null() {
                continue;
            }
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(&value.to_string());
        }

        if let Some(err) = entry.metadata.get(ERROR_KEY).filter(|v| !v.is_null()) {
            out.push_str("\n\n");
            out.push_str(&FieldValue::render_detailed(err));
        }

        Ok(out.into_bytes())
    }
}
