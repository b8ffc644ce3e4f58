//! Error types for the subtitle fetcher.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the subtitle fetcher.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("wget not found. Install it and make sure it is on PATH")]
    WgetNotFound,

    #[error("7z not found. Install p7zip and make sure it is on PATH")]
    SevenZipNotFound,

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Target already exists: {0}")]
    FileAlreadyExists(String),

    #[error("No subtitle file to rename in: {0}")]
    NoSubtitleFile(String),

    #[error("Ambiguous folder contents (multiple movie files): {0}")]
    AmbiguousFolder(String),

    // External tool errors
    #[error("{tool} exited with status {code}: {stderr}")]
    ToolFailed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
