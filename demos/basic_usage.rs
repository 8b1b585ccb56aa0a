//! Basic logger usage example
//!
//! Demonstrates the default logger, an explicitly built logger and
//! threshold changes.
//!
//! Run with: cargo run --example basic_usage

use rust_console_logger::prelude::*;

fn main() {
    // Default instance: labels, colors, console writer
    rust_console_logger::print().msg("=== Rust Console Logger - Basic Usage ===");
    rust_console_logger::info().msg("This is an info message");
    rust_console_logger::warn().msg("This is a warning message");
    rust_console_logger::error().msg("This is an error message");
    rust_console_logger::debug().msg("This is a debug message");
    rust_console_logger::info().label("NET").msg("Custom label");

    // Explicit logger with timestamps and no colors
    let logger = Logger::builder()
        .level(LogLevel::Info)
        .formatter(ConsoleFormatter::new(
            ConsoleFormatterConfig::new()
                .with_colorize(false)
                .with_timestamp_format(TimestampFormat::Iso8601),
        ))
        .writer(ConsoleWriter::new())
        .build();

    logger.info().field("port", 8080).msg("Server listening");
    logger.debug().msg("Debug message (hidden)");

    logger.set_level(LogLevel::Debug);
    logger.debug().msg("Debug message (visible)");

    logger.print().msg("Done.");
}
