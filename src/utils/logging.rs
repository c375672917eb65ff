//! tracing subscriber setup.
//!
//! The play screen owns stdout, so interactive sessions log to a file.
//! `RUST_LOG` overrides the default filter.

use crate::core::error::FlappyError;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "flappy=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn init_failed(e: Box<dyn std::error::Error + Send + Sync>) -> FlappyError {
    FlappyError::Io(io::Error::new(io::ErrorKind::Other, e))
}

/// Append plain-text log lines to `path`.
pub fn init_file(path: &Path) -> Result<(), FlappyError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(init_failed)
}

/// Log to stderr, for non-interactive commands.
pub fn init_stderr() -> Result<(), FlappyError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(init_failed)
}
