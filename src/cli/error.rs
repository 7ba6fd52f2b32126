//! CLI-specific error types

use crate::convert::ConversionError;
use crate::duration::DurationError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Shown to the user in place of the underlying import/export failure,
    /// which is logged instead.
    #[error("Error transforming XML. Please check your input.")]
    ConversionFailed(#[source] ConversionError),

    #[error("Duration error: {0}")]
    DurationError(#[from] DurationError),
}
