//! Writer implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod multi;

pub use console::{ConsoleWriter, ConsoleWriterConfig, OutputStream};
#[cfg(feature = "file")]
pub use file::FileWriter;
pub use multi::MultiWriter;

pub use crate::core::Writer;
