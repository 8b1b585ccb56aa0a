//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Use the event
//! builder (`logger.info().field(..).msg(..)`) when metadata is needed.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.event($level).msg_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a fatal message, then terminate through the logger's exit handler.
///
/// # Examples
///
/// ```no_run
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::fatal;
/// fatal!(logger, "cannot continue: {}", "config missing");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log plain user-facing output at the silent tier.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::print_log;
/// print_log!(logger, "{} files copied", 3);
/// ```
#[macro_export]
macro_rules! print_log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Silent, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::warn;
/// warn!(logger, "Memory usage high");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{error::Result, Formatter, LogEntry, LogLevel, Logger, Writer};
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct MessageOnly;

    impl Formatter for MessageOnly {
        fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
            Ok(format!("{}:{}", entry.level, entry.message).into_bytes())
        }
    }

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>);

    impl Writer for Lines {
        fn write(&self, data: &[u8], _level: LogLevel) -> Result<()> {
            self.0.lock().push(String::from_utf8_lossy(data).into_owned());
            Ok(())
        }
    }

    #[test]
    fn test_macros_format_and_dispatch() {
        let lines = Arc::new(Lines::default());
        let logger = Logger::builder()
            .level(LogLevel::Debug)
            .formatter(MessageOnly)
            .shared_writer(lines.clone())
            .build();

        crate::info!(logger, "listening on {}", 8080);
        crate::warn!(logger, "plain");
        crate::error!(logger, "code={}", 500);
        crate::debug!(logger, "{:?}", [1, 2]);
        crate::print_log!(logger, "{} files", 3);
        crate::log!(logger, LogLevel::Info, "explicit");

        assert_eq!(
            *lines.0.lock(),
            vec![
                "info:listening on 8080",
                "warn:plain",
                "error:code=500",
                "debug:[1, 2]",
                "silent:3 files",
                "info:explicit",
            ]
        );
    }
}
