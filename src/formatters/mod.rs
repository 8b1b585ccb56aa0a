//! Formatter implementations

pub mod colorizer;
pub mod console;
pub mod json;

#[cfg(feature = "console")]
pub use colorizer::TerminalColorizer;
pub use colorizer::{Colorizer, NoOpColorizer};
pub use console::{ConsoleFormatter, ConsoleFormatterConfig};
pub use json::JsonFormatter;

pub use crate::core::Formatter;
