//! Tracing setup for the `vel` binary.
//!
//! The UI owns the terminal, so logs never go to stdout or stderr: they are
//! appended to a file, or discarded.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::VelError;

/// `RUST_LOG` wins over `level`; an unparsable level falls back to `info`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already installed or the
/// log file cannot be opened.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<(), VelError> {
    let builder = fmt()
        .with_env_filter(filter(level))
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| VelError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(io::sink).try_init(),
    };
    installed.map_err(|err| VelError::Logging(err.to_string()))
}
