//! Test helpers
//!
//! Documents on the real disk, inside a temporary directory.

#![allow(dead_code)]

use docprobe::{CallLog, Document, NativeFileSystem, OperationLogs, VirtualFileSystem};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary workspace with one document and one call log
pub struct Workspace {
    pub dir: TempDir,
    pub fs: Arc<dyn VirtualFileSystem>,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
            fs: Arc::new(NativeFileSystem::new()),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` and return its full path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn log(&self, name: &str) -> CallLog {
        CallLog::new(Arc::clone(&self.fs), self.path(name))
    }

    /// Document `doc` with every call going to `log`
    pub fn document(&self, doc: &str, log: &str) -> Document {
        Document::builder(self.path(doc))
            .fs(Arc::clone(&self.fs))
            .logs(OperationLogs::shared(self.log(log)))
            .build()
            .expect("build document")
    }

    /// Lines of a call log; empty when the log was never created
    pub fn lines(&self, name: &str) -> Vec<String> {
        match fs::read_to_string(self.path(name)) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Split a call-log line into timestamp and the remainder after ` - `
pub fn split_line(line: &str) -> (&str, &str) {
    line.split_once(" - ").expect("line has a timestamp")
}
