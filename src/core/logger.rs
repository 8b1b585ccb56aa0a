//! Main logger implementation
//!
//! A [`Logger`] holds a threshold level, a formatter and a writer. Each
//! event passes through the same steps:
//!
//! 1. events less severe than the threshold are dropped
//! 2. events are dropped when the formatter or writer is unset
//! 3. the level's default label is added unless a label is present
//! 4. one trailing line break is stripped from the message
//! 5. the formatter renders the entry; failures drop the event
//! 6. the writer receives the bytes; its result is ignored
//! 7. fatal events invoke the exit handler last
//!
//! Nothing on this path reports an error to the caller.

use super::{
    event::Event, formatter::Formatter, log_entry::LogEntry, log_level::LogLevel, writer::Writer,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Exit status used after a fatal event
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback invoked with [`FATAL_EXIT_CODE`] after a fatal event is written.
///
/// The default handler calls [`std::process::exit`]. Tests substitute a
/// handler that records the call instead.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

fn process_exit() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

struct LoggerConfig {
    level: LogLevel,
    formatter: Option<Arc<dyn Formatter>>,
    writer: Option<Arc<dyn Writer>>,
    exit_handler: ExitHandler,
}

/// Consistent copy of the configuration taken for one dispatch
struct Snapshot {
    formatter: Option<Arc<dyn Formatter>>,
    writer: Option<Arc<dyn Writer>>,
    exit_handler: ExitHandler,
}

/// Level-filtered dispatcher pairing one formatter with one writer
pub struct Logger {
    config: RwLock<LoggerConfig>,
}

impl Logger {
    /// Create an inert logger with an `Info` threshold
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RwLock::new(LoggerConfig {
                level: LogLevel::Info,
                formatter: None,
                writer: None,
                exit_handler: process_exit(),
            }),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Debug)
    ///     .formatter(ConsoleFormatter::default())
    ///     .writer(ConsoleWriter::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.config.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.config.write().level = level;
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        self.set_shared_formatter(Arc::new(formatter));
    }

    pub fn set_shared_formatter(&self, formatter: Arc<dyn Formatter>) {
        self.config.write().formatter = Some(formatter);
    }

    pub fn clear_formatter(&self) {
        self.config.write().formatter = None;
    }

    pub fn set_writer<W: Writer + 'static>(&self, writer: W) {
        self.set_shared_writer(Arc::new(writer));
    }

    pub fn set_shared_writer(&self, writer: Arc<dyn Writer>) {
        self.config.write().writer = Some(writer);
    }

    pub fn clear_writer(&self) {
        self.config.write().writer = None;
    }

    /// Replace formatter and writer together; no event sees one without the other
    pub fn set_output(&self, formatter: Arc<dyn Formatter>, writer: Arc<dyn Writer>) {
        let mut config = self.config.write();
        config.formatter = Some(formatter);
        config.writer = Some(writer);
    }

    pub fn set_exit_handler(&self, handler: ExitHandler) {
        self.config.write().exit_handler = handler;
    }

    /// Both a formatter and a writer are configured
    pub fn is_configured(&self) -> bool {
        let config = self.config.read();
        config.formatter.is_some() && config.writer.is_some()
    }

    /// Whether events at `level` pass the current threshold
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.config.read().level)
    }

    /// Read the threshold and strategies under a single lock acquisition.
    ///
    /// Returns `None` when `level` is filtered out.
    fn snapshot(&self, level: LogLevel) -> Option<Snapshot> {
        let config = self.config.read();
        if !level.passes(config.level) {
            return None;
        }
        Some(Snapshot {
            formatter: config.formatter.clone(),
            writer: config.writer.clone(),
            exit_handler: Arc::clone(&config.exit_handler),
        })
    }

    /// Dispatch an entry.
    ///
    /// Fatal entries call the exit handler after the write attempt, even
    /// when the entry was dropped because the logger is inert or the
    /// formatter failed.
    pub fn log(&self, mut entry: LogEntry) {
        let Some(snapshot) = self.snapshot(entry.level) else {
            return;
        };

        if let (Some(formatter), Some(writer)) = (&snapshot.formatter, &snapshot.writer) {
            entry.apply_default_label();
            entry.trim_message();

            if let Ok(data) = formatter.format(&entry) {
                let _ = writer.write(&data, entry.level);
            }
        }

        if entry.level == LogLevel::Fatal {
            (snapshot.exit_handler)(FATAL_EXIT_CODE);
        }
    }

    /// Open an event at `level`
    pub fn event(&self, level: LogLevel) -> Event<'_> {
        Event::new(self, level)
    }

    /// Open a fatal event; emitting it terminates the process
    pub fn fatal(&self) -> Event<'_> {
        self.event(LogLevel::Fatal)
    }

    /// Open a silent-tier event for plain user-facing output
    pub fn print(&self) -> Event<'_> {
        self.event(LogLevel::Silent)
    }

    pub fn error(&self) -> Event<'_> {
        self.event(LogLevel::Error)
    }

    pub fn info(&self) -> Event<'_> {
        self.event(LogLevel::Info)
    }

    pub fn warn(&self) -> Event<'_> {
        self.event(LogLevel::Warn)
    }

    pub fn debug(&self) -> Event<'_> {
        self.event(LogLevel::Debug)
    }

    /// Close the configured writer, if any
    pub fn close(&self) -> super::error::Result<()> {
        let writer = self.config.read().writer.clone();
        match writer {
            Some(writer) => writer.close(),
            None => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_console_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Warn)
///     .formatter(ConsoleFormatter::new(ConsoleFormatterConfig::new().with_colorize(false)))
///     .writer(ConsoleWriter::with_config(ConsoleWriterConfig::new().with_force_stdout(true)))
///     .build();
/// assert!(logger.is_configured());
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    formatter: Option<Arc<dyn Formatter>>,
    writer: Option<Arc<dyn Writer>>,
    exit_handler: Option<ExitHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            formatter: None,
            writer: None,
            exit_handler: None,
        }
    }

    /// Set the threshold level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_writer(mut self, writer: Arc<dyn Writer>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Replace the process exit performed after fatal events
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.exit_handler = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            config: RwLock::new(LoggerConfig {
                level: self.level,
                formatter: self.formatter,
                writer: self.writer,
                exit_handler: self.exit_handler.unwrap_or_else(process_exit),
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
