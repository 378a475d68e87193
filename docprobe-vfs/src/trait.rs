//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::path::Path;

/// Virtual File System trait
///
/// Provides a unified interface for file operations, decoupling code from
/// specific file system implementations.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Read file contents
    ///
    /// # Returns
    /// File contents as bytes, `VfsError::NotFound` if the file is missing
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Write file contents
    ///
    /// Creates the file if it doesn't exist, truncates it if it does.
    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()>;

    /// Append to a file, creating it if it doesn't exist
    ///
    /// The whole of `content` is written in one call; any handle opened for
    /// the append is closed before returning.
    fn append_file(&self, path: &Path, content: &[u8]) -> VfsResult<()>;

    /// Remove a file
    ///
    /// Fails with `VfsError::NotFound` if there is nothing to remove.
    fn remove_file(&self, path: &Path) -> VfsResult<()>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a file
    fn is_file(&self, path: &Path) -> bool;
}
