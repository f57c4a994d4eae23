use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors outside the scan (terminal, log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal initialization errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The root argument does not exist or cannot be inspected.
    #[error("Cannot open {}: {source}", .path.display())]
    CannotOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The root argument exists but is not a directory.
    #[error("Cannot open {}: is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// An entry could not be stat'ed or enumerated during the walk.
    #[error("Unable to populate filesystem tree: {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A child entry was seen before its parent was registered.
    #[error("unrooted child path at {}", .0.display())]
    UnrootedEntry(PathBuf),
}

impl AppError {
    /// Build a scan error from a `walkdir` failure, keeping the offending path.
    pub fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        AppError::Scan { path, source }
    }
}
