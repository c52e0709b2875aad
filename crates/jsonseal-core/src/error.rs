use std::path::{Path, PathBuf};

/// Errors that can occur while sealing a JSON file.
#[derive(Debug, thiserror::Error)]
pub enum JsonsealError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("cannot access {}: {reason}", .path.display())]
    FileAccess { path: PathBuf, reason: String },
}

impl JsonsealError {
    /// Wrap an I/O failure on `path`.
    pub fn file_access(path: &Path, err: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonsealError>;
