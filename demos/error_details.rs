//! Error detail rendering example
//!
//! Shows metadata fields and an attached error with a cause chain.
//!
//! Run with: cargo run --example error_details

use rust_console_logger::prelude::*;
use std::fmt;
use std::io;

#[derive(Debug)]
struct LoadError {
    path: String,
    source: io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot load {}", self.path)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn main() {
    let err = LoadError {
        path: "settings.toml".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    };

    default_logger()
        .error()
        .field("attempt", 3)
        .value("path", &std::path::Path::new("settings.toml").display())
        .error(err)
        .msg("Startup failed");
}
