use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The config directory could not be created or the config file could
/// not be written.
///
/// Non-fatal: callers degrade to an in-memory recent list for the
/// session and surface a non-blocking notice.
#[derive(Error, Debug)]
#[error("storage unavailable at {}: {}", .path.display(), .source)]
pub struct StorageUnavailable {
    /// Path that could not be created or written.
    pub path: PathBuf,
    /// Underlying filesystem error.
    pub source: io::Error,
}

/// Failure reported by the playback engine, tagged with the operation
/// that failed so a shell can name it in a notice.
#[derive(Error, Debug)]
#[error("playback engine failed during {operation}: {message}")]
pub struct EngineError {
    /// Engine call that failed (`"open"`, `"play"`, ...).
    pub operation: &'static str,
    /// Engine-provided description of the failure.
    pub message: String,
}

impl EngineError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Failure while capturing a still frame.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// No media is playing or paused, so there is no frame to capture.
    #[error("no media is playing or paused")]
    Inactive,
    /// The engine accepted the request but could not produce the image.
    #[error("snapshot failed: {0}")]
    Failed(String),
}

/// Session-level error, one variant per user-visible failure class.
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or whitespace-only media reference.
    #[error("no media reference given")]
    InvalidReference,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
}
