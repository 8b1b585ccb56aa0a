//! Console writer implementation

use crate::core::{LogLevel, LoggerError, Result, Writer};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Byte sink used for one of the console streams
pub type OutputStream = Box<dyn Write + Send>;

/// Routing options for [`ConsoleWriter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleWriterConfig {
    /// Send every level to stderr; wins over `force_stdout`
    pub force_stderr: bool,
    /// Send every level to stdout
    pub force_stdout: bool,
    /// Do not append a line break after each entry
    pub disable_newline: bool,
}

impl ConsoleWriterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_force_stderr(mut self, force: bool) -> Self {
        self.force_stderr = force;
        self
    }

    #[must_use]
    pub fn with_force_stdout(mut self, force: bool) -> Self {
        self.force_stdout = force;
        self
    }

    #[must_use]
    pub fn with_disable_newline(mut self, disable: bool) -> Self {
        self.disable_newline = disable;
        self
    }
}

#[derive(Clone, Copy)]
enum Target {
    Stdout,
    Stderr,
}

impl Target {
    fn name(self) -> &'static str {
        match self {
            Target::Stdout => "stdout",
            Target::Stderr => "stderr",
        }
    }
}

struct Streams {
    stdout: OutputStream,
    stderr: OutputStream,
}

impl Streams {
    fn get(&mut self, target: Target) -> &mut OutputStream {
        match target {
            Target::Stdout => &mut self.stdout,
            Target::Stderr => &mut self.stderr,
        }
    }
}

fn write_entry(stream: &mut OutputStream, data: &[u8], newline: bool) -> io::Result<()> {
    stream.write_all(data)?;
    if newline {
        stream.write_all(b"\n")?;
    }
    stream.flush()
}

/// Writes silent-tier output to stdout and everything else to stderr
pub struct ConsoleWriter {
    streams: Mutex<Streams>,
    config: ConsoleWriterConfig,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_config(ConsoleWriterConfig::default())
    }

    pub fn with_config(config: ConsoleWriterConfig) -> Self {
        Self::with_streams(Box::new(io::stdout()), Box::new(io::stderr()), config)
    }

    /// Use custom streams in place of the process stdout and stderr
    pub fn with_streams(
        stdout: OutputStream,
        stderr: OutputStream,
        config: ConsoleWriterConfig,
    ) -> Self {
        Self {
            streams: Mutex::new(Streams { stdout, stderr }),
            config,
        }
    }

    pub fn config(&self) -> &ConsoleWriterConfig {
        &self.config
    }

    fn target(&self, level: LogLevel) -> Target {
        if self.config.force_stderr {
            Target::Stderr
        } else if self.config.force_stdout || level == LogLevel::Silent {
            Target::Stdout
        } else {
            Target::Stderr
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, data: &[u8], level: LogLevel) -> Result<()> {
        let target = self.target(level);
        let mut streams = self.streams.lock();
        let stream = streams.get(target);

        write_entry(stream, data, !self.config.disable_newline).map_err(|e| {
            LoggerError::io_operation(
                format!("writing to {}", target.name()),
                "console write failed",
                e,
            )
        })
    }

    fn close(&self) -> Result<()> {
        let mut streams = self.streams.lock();
        streams.stdout.flush()?;
        streams.stderr.flush()?;
        Ok(())
    }
}
