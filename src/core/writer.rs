//! Writer trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Delivers formatted bytes to a destination.
///
/// Writers are shared across threads and take `&self`; each one serializes
/// its own output.
pub trait Writer: Send + Sync {
    fn write(&self, data: &[u8], level: LogLevel) -> Result<()>;

    /// Release the underlying destination
    fn close(&self) -> Result<()> {
        Ok(())
    }
}
