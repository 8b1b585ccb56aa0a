//! File writer implementation

use crate::core::{LogLevel, LoggerError, Result, Writer};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends every entry to a file, one line per entry
pub struct FileWriter {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
    disable_newline: bool,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    format!("opening '{}'", path.display()),
                    "cannot open log file",
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
            disable_newline: false,
        })
    }

    /// Do not append a line break after each entry
    #[must_use]
    pub fn with_disable_newline(mut self, disable: bool) -> Self {
        self.disable_newline = disable;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Writer for FileWriter {
    fn write(&self, data: &[u8], _level: LogLevel) -> Result<()> {
        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| LoggerError::writer(format!("'{}' is closed", self.path.display())))?;

        writer.write_all(data)?;
        if !self.disable_newline {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(mut writer) = self.writer.lock().take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.close();
    }
}
