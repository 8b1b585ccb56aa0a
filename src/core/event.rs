//! Fluent construction of a single log event
//!
//! An [`Event`] is opened by one of the level methods on [`Logger`] and
//! consumed by [`Event::msg`] or [`Event::msg_fmt`], which hand it to the
//! logger exactly once.

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::metadata::{FieldValue, SharedError, ERROR_KEY, LABEL_KEY};
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;

/// Builder for one log event bound to a logger
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let logger = Logger::new();
///
/// logger.info()
///     .label("HTTP")
///     .field("status", 200)
///     .field("path", "/health")
///     .msg("request served");
/// ```
#[must_use = "an event is only logged once `msg` or `msg_fmt` is called"]
pub struct Event<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl<'a> Event<'a> {
    pub(crate) fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            entry: LogEntry::new(level, String::new()),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.entry.level
    }

    /// Set the short bracketed label, replacing the level default
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.entry.metadata.insert(LABEL_KEY, label.into());
        self
    }

    /// Add a metadata field; a repeated key replaces the earlier value
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entry.metadata.insert(key, value);
        self
    }

    /// Add a field captured through its `Display` rendering
    pub fn value<K, T>(mut self, key: K, value: &T) -> Self
    where
        K: Into<String>,
        T: fmt::Display + ?Sized,
    {
        self.entry.metadata.insert(key, FieldValue::display(value));
        self
    }

    /// Attach an error, rendered after the message with its cause chain
    pub fn error<E>(mut self, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.entry.metadata.insert(ERROR_KEY, FieldValue::error(err));
        self
    }

    /// Attach an error that is already shared
    pub fn shared_error(mut self, err: SharedError) -> Self {
        self.entry.metadata.insert(ERROR_KEY, FieldValue::Error(err));
        self
    }

    /// Attach a boxed error
    pub fn boxed_error(self, err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        self.shared_error(SharedError::from(err))
    }

    /// Use an explicit event time instead of the formatter's clock
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.entry.timestamp = Some(timestamp);
        self
    }

    /// Set the message and dispatch the event
    pub fn msg(mut self, message: impl Into<String>) {
        self.entry.message = message.into();
        self.logger.log(self.entry);
    }

    /// Format the message and dispatch the event
    ///
    /// ```
    /// use rust_console_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// let port = 8080;
    /// logger.info().msg_fmt(format_args!("listening on {}", port));
    /// ```
    pub fn msg_fmt(self, args: fmt::Arguments<'_>) {
        self.msg(fmt::format(args));
    }
}
