use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort startup before any window is shown.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Stylesheet path does not exist.
    #[error("Stylesheet not found: {0}")]
    StylesheetNotFound(PathBuf),
    /// Stylesheet exists but could not be read as UTF-8 text.
    #[error("Failed to read stylesheet {path}: {source}")]
    StylesheetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Stylesheet was read but is not usable CSS.
    #[error("Malformed stylesheet: {0}")]
    StylesheetMalformed(String),
    /// Path contains characters that cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// GTK could not open a display.
    #[error("Could not connect to a display")]
    NoDisplay,
}
