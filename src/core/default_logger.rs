//! Process-wide default logger
//!
//! The default instance is created on first use and lives until the
//! process exits. It logs at `Debug` and above, renders labels (colored
//! when the `console` feature is enabled) without timestamps, and writes
//! through a [`ConsoleWriter`].

use super::event::Event;
use super::log_level::LogLevel;
use super::logger::Logger;
use crate::formatters::{ConsoleFormatter, ConsoleFormatterConfig};
use crate::writers::ConsoleWriter;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

fn default_formatter_config() -> ConsoleFormatterConfig {
    let config = ConsoleFormatterConfig::new()
        .with_timestamp(false)
        .with_colorize(true);

    #[cfg(feature = "console")]
    let config = config.with_colorizer(crate::formatters::TerminalColorizer::new());

    config
}

/// The shared default logger, initialised on first call
///
/// ```
/// use rust_console_logger::{default_logger, LogLevel};
///
/// default_logger().set_level(LogLevel::Info);
/// default_logger().info().msg("service ready");
/// ```
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| {
        Logger::builder()
            .level(LogLevel::Debug)
            .formatter(ConsoleFormatter::new(default_formatter_config()))
            .writer(ConsoleWriter::new())
            .build()
    })
}

/// Open a fatal event on the default logger
pub fn fatal() -> Event<'static> {
    default_logger().fatal()
}

/// Open a silent-tier event on the default logger
pub fn print() -> Event<'static> {
    default_logger().print()
}

/// Open an error event on the default logger
pub fn error() -> Event<'static> {
    default_logger().error()
}

/// Open an info event on the default logger
pub fn info() -> Event<'static> {
    default_logger().info()
}

/// Open a warn event on the default logger
pub fn warn() -> Event<'static> {
    default_logger().warn()
}

/// Open a debug event on the default logger
pub fn debug() -> Event<'static> {
    default_logger().debug()
}
