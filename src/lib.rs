//! Docprobe - text file inspection with per-call logging
//!
//! Every document operation is written to a call log as one line:
//! `<timestamp> - Function: <name> - Arguments: args=<args>, kwargs=<kwargs> - Result: <result>`.
//!
//! # Architecture
//!
//! ```text
//! docprobe-config  - defaults, log routes, config file format
//! docprobe-log     - leveled diagnostics logger
//! docprobe-vfs     - file system abstraction (native, memory)
//! docprobe-core    - call instrumentation and the Document type
//! docprobe-cli     - the `docprobe` binary
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use docprobe::Document;
//!
//! let mut doc = Document::new("sample.txt").unwrap();
//! doc.load_file().unwrap();
//! println!("{} words", doc.word_count().unwrap());
//! ```

pub use docprobe_config as config;
pub use docprobe_core as core;
pub use docprobe_log as log;
pub use docprobe_vfs as vfs;

// Common types
pub use docprobe_config::{LogLevel, LogRoutes, Operation, ProbeConfig};
pub use docprobe_core::{
    CallArgs, CallLog, CallRecord, DocError, Document, DocumentBuilder, Instrumented, LogError,
    OperationLogs, TIMESTAMP_FORMAT,
};
pub use docprobe_vfs::{MemoryFileSystem, NativeFileSystem, VfsError, VirtualFileSystem};
