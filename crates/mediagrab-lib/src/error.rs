use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaGrabError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("No media URLs found in {path}")]
    NoMediaFound { path: PathBuf },

    #[error("Output directory creation failed at {path}: {reason}")]
    OutputDirectoryCreation { path: PathBuf, reason: String },

    #[error("CLI argument validation failed: {details}")]
    CliArgumentValidation { details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
