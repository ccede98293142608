//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, transport, and decode errors, and provides semantic
//! variants for configuration and lookup failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image not found: {}", .path.display())]
    ImageNotFound { path: PathBuf },

    #[error("Unsupported client configuration: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
