//! Docprobe Virtual File System
//!
//! A file system abstraction with a native backend and an in-memory one.
//! Documents read through it and call logs append through it, so tests can
//! swap the disk for memory.
//!
//! # Usage
//! ```
//! use docprobe_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.append_file(Path::new("/calls.log"), b"one\n").unwrap();
//! fs.append_file(Path::new("/calls.log"), b"two\n").unwrap();
//! assert_eq!(fs.read_file(Path::new("/calls.log")).unwrap(), b"one\ntwo\n");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;
