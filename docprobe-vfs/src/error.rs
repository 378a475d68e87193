//! VFS Error Types

use std::io;
use std::path::Path;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Debug, thiserror::Error)]
pub enum VfsError {
    /// File or directory not found
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// Permission denied
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Any other I/O failure
    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Custom error message
    #[error("{message}")]
    Custom { message: String },
}

impl VfsError {
    /// Classify an `io::Error` raised while touching `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_string_lossy().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => VfsError::NotFound { path },
            io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io { path, source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound { .. })
    }
}
