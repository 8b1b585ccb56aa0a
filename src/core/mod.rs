//! Core logger types and traits

pub mod default_logger;
pub mod error;
pub mod event;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metadata;
pub mod timestamp;
pub mod writer;

pub use default_logger::default_logger;
pub use error::{LoggerError, Result};
pub use event::Event;
pub use formatter::Formatter;
pub use log_entry::{trim_trailing_newline, LogEntry};
pub use log_level::{LogLevel, UNKNOWN_LEVEL};
pub use logger::{ExitHandler, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metadata::{FieldValue, Metadata, SharedError, ERROR_KEY, LABEL_KEY};
pub use timestamp::TimestampFormat;
pub use writer::Writer;
