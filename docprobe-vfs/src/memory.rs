//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system implementation.
///
/// All files are stored in memory using a `BTreeMap`, making it suitable
/// for testing and scenarios where disk access is not desired. Clones share
/// the same storage.
///
/// Paths listed in [`MemoryFileSystem::deny_writes`] reject writes and
/// appends with `PermissionDenied`, which lets tests exercise failing logs.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    read_only: Arc<RwLock<Vec<String>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        if let Ok(mut map) = fs.files.write() {
            for (path, content) in files {
                map.insert(fs.normalize_path(Path::new(path.as_ref())), content);
            }
        }
        fs
    }

    /// Make writes and appends to `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: &Path) {
        if let Ok(mut denied) = self.read_only.write() {
            denied.push(self.normalize_path(path));
        }
    }

    /// Uses forward slashes consistently for cross-platform compatibility.
    fn normalize_path(&self, path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    fn check_writable(&self, normalized: &str) -> VfsResult<()> {
        let denied = self.read_only.read().map_err(|_| poisoned())?;
        if denied.iter().any(|p| p == normalized) {
            return Err(VfsError::PermissionDenied {
                path: normalized.to_string(),
            });
        }
        Ok(())
    }
}

fn poisoned() -> VfsError {
    VfsError::Custom {
        message: String::from("Lock poisoned"),
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = self.normalize_path(path);
        let files = self.files.read().map_err(|_| poisoned())?;

        files
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = self.normalize_path(path);
        self.check_writable(&normalized)?;
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.insert(normalized, content.to_vec());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = self.normalize_path(path);
        self.check_writable(&normalized)?;
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.entry(normalized).or_default().extend_from_slice(content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> VfsResult<()> {
        let normalized = self.normalize_path(path);
        let mut files = self.files.write().map_err(|_| poisoned())?;
        match files.remove(&normalized) {
            Some(_) => Ok(()),
            None => Err(VfsError::NotFound { path: normalized }),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = self.normalize_path(path);
        match self.files.read() {
            Ok(files) => files.contains_key(&normalized),
            Err(_) => false,
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        // no directories in memory
        self.exists(path)
    }
}
