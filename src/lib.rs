//! # Rust Console Logger
//!
//! A small synchronous structured logger. Events are filtered by level,
//! rendered by a pluggable [`Formatter`] and delivered by a [`Writer`].
//!
//! ## Features
//!
//! - **Level filtering**: a single threshold per logger
//! - **Labelled console output**: `[INF] message key=value` with optional colors
//! - **Structured metadata**: typed fields and attached errors with cause chains
//! - **Thread safe**: configuration can be swapped while other threads log
//!
//! ```
//! use rust_console_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level(LogLevel::Debug)
//!     .formatter(ConsoleFormatter::new(ConsoleFormatterConfig::new().with_timestamp(false)))
//!     .writer(ConsoleWriter::new())
//!     .build();
//!
//! logger.info().field("port", 8080).msg("listening");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod writers;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::formatters::TerminalColorizer;
    pub use crate::formatters::{
        Colorizer, ConsoleFormatter, ConsoleFormatterConfig, JsonFormatter, NoOpColorizer,
    };
    #[cfg(feature = "file")]
    pub use crate::writers::FileWriter;
    pub use crate::writers::{ConsoleWriter, ConsoleWriterConfig, MultiWriter};
    pub use crate::core::{
        default_logger, Event, ExitHandler, FieldValue, Formatter, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerError, Metadata, Result, TimestampFormat, Writer, ERROR_KEY,
        FATAL_EXIT_CODE, LABEL_KEY,
    };
}

pub use crate::core::default_logger::{debug, error, fatal, info, print, warn};
pub use crate::core::{
    default_logger, Event, ExitHandler, FieldValue, Formatter, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerError, Metadata, Result, TimestampFormat, Writer, ERROR_KEY,
    FATAL_EXIT_CODE, LABEL_KEY,
};
