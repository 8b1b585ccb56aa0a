//! Formatter trait for rendering log entries

use super::{error::Result, log_entry::LogEntry};

/// Renders a [`LogEntry`] into output bytes.
///
/// Implementations must not include a trailing line break; that belongs
/// to the writer.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>>;
}
