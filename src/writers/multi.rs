//! Fan-out writer

use crate::core::{LogLevel, Result, Writer};
use std::sync::Arc;

/// Forwards each write to several writers.
///
/// Every writer is attempted even when an earlier one fails; the last
/// failure is returned. `close` behaves the same way.
#[derive(Default, Clone)]
pub struct MultiWriter {
    writers: Vec<Arc<dyn Writer>>,
}

impl MultiWriter {
    pub fn new() -> Self {
        Self {
            writers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Arc::new(writer));
        self
    }

    pub fn add_writer(&mut self, writer: Arc<dyn Writer>) {
        self.writers.push(writer);
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    fn for_each(&self, mut op: impl FnMut(&dyn Writer) -> Result<()>) -> Result<()> {
        let mut last_err = None;
        for writer in &self.writers {
            if let Err(e) = op(writer.as_ref()) {
                last_err = Some(e);
            }
        }
        last_err.map_or(Ok(()), Err)
    }
}

impl FromIterator<Arc<dyn Writer>> for MultiWriter {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Writer>>>(iter: I) -> Self {
        Self {
            writers: iter.into_iter().collect(),
        }
    }
}

impl Writer for MultiWriter {
    fn write(&self, data: &[u8], level: LogLevel) -> Result<()> {
        self.for_each(|writer| writer.write(data, level))
    }

    fn close(&self) -> Result<()> {
        self.for_each(|writer| writer.close())
    }
}
