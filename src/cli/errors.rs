use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "Missing credentials. Either pass --client-id/--client-secret or set ASPOSE_CLIENT_ID/ASPOSE_CLIENT_SECRET."
    )]
    MissingCredentials,

    #[error("Image not found: {}", .path.display())]
    ImageNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reader error: {0}")]
    Reader(#[from] barscan::Error),
}
