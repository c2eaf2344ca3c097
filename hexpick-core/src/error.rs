//! Error types for the color picker.

use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes, used as process exit codes by the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Text is not a six-digit hex color (2)
    InvalidHex = 2,
    /// Unknown RGB channel name (3)
    InvalidChannel = 3,
    /// Clipboard write failed (4)
    Clipboard = 4,
    /// Configuration file could not be parsed (5)
    Config = 5,
    /// Filesystem error (6)
    Io = 6,
}

/// Failure reported by a clipboard backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    WriteFailed(String),
}

/// Main error type for the picker core.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid hex color '{input}': {}", crate::config::HEX_FORMAT_MESSAGE)]
    InvalidHex { input: String },

    #[error("Invalid channel '{input}': expected r, g or b")]
    InvalidChannel { input: String },

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PickerError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PickerError::InvalidHex { .. } => ErrorCode::InvalidHex,
            PickerError::InvalidChannel { .. } => ErrorCode::InvalidChannel,
            PickerError::Clipboard(_) => ErrorCode::Clipboard,
            PickerError::Config { .. } => ErrorCode::Config,
            PickerError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
