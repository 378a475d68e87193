//! Docprobe core
//!
//! ```text
//! instrument  - call records, call logs, and the wrapper that writes them
//! document    - the document state holder, every operation instrumented
//! error       - error types
//! ```
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use docprobe_core::{CallLog, Document, OperationLogs};
//! use docprobe_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = Arc::new(MemoryFileSystem::with_files([("notes.txt", b"One two".to_vec())]));
//! let log = CallLog::new(fs.clone(), "calls.log");
//!
//! let mut doc = Document::builder("notes.txt")
//!     .fs(fs.clone())
//!     .logs(OperationLogs::shared(log))
//!     .build()
//!     .unwrap();
//! assert!(doc.load_file().unwrap());
//! assert_eq!(doc.word_count().unwrap(), 2);
//!
//! let calls = String::from_utf8(fs.read_file(Path::new("calls.log")).unwrap()).unwrap();
//! assert_eq!(calls.lines().count(), 3);
//! ```

pub mod document;
pub mod error;
pub mod instrument;

pub use docprobe_config::Operation;
pub use document::{Document, DocumentBuilder, OperationLogs};
pub use error::{DocError, LogError};
pub use instrument::{CallArgs, CallLog, CallRecord, Instrumented, TIMESTAMP_FORMAT};
