//! Document state holder
//!
//! A `Document` owns a path and an optional in-memory text buffer. Every
//! public operation, construction included, is recorded to the call log that
//! [`OperationLogs`] routes it to.
//!
//! Content moves through two states only: unset (`None`) until the first
//! `load_file` or `add_text`, then loaded (`Some(text)`). Nothing is ever
//! written back to the document file.

use crate::error::{DocError, LogError};
use crate::instrument::{CallArgs, CallLog};
use docprobe_config::{LogRoutes, Operation};
use docprobe_log::{debug, warn, Logger};
use docprobe_vfs::{NativeFileSystem, VirtualFileSystem};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Call log per document operation
#[derive(Clone, Debug)]
pub struct OperationLogs {
    new: CallLog,
    load_file: CallLog,
    word_count: CallLog,
    search_word: CallLog,
    add_text: CallLog,
}

impl OperationLogs {
    /// Send every operation to one log
    pub fn shared(log: CallLog) -> Self {
        Self {
            new: log.clone(),
            load_file: log.clone(),
            word_count: log.clone(),
            search_word: log.clone(),
            add_text: log,
        }
    }

    /// Build logs from configured routes, all on `fs`
    pub fn from_routes(fs: Arc<dyn VirtualFileSystem>, routes: &LogRoutes) -> Self {
        let log_for = |op| CallLog::new(Arc::clone(&fs), routes.path_for(op).clone());
        Self {
            new: log_for(Operation::New),
            load_file: log_for(Operation::LoadFile),
            word_count: log_for(Operation::WordCount),
            search_word: log_for(Operation::SearchWord),
            add_text: log_for(Operation::AddText),
        }
    }

    /// Replace the log for one operation
    pub fn route(mut self, op: Operation, log: CallLog) -> Self {
        *self.slot(op) = log;
        self
    }

    pub fn get(&self, op: Operation) -> &CallLog {
        match op {
            Operation::New => &self.new,
            Operation::LoadFile => &self.load_file,
            Operation::WordCount => &self.word_count,
            Operation::SearchWord => &self.search_word,
            Operation::AddText => &self.add_text,
        }
    }

    fn slot(&mut self, op: Operation) -> &mut CallLog {
        match op {
            Operation::New => &mut self.new,
            Operation::LoadFile => &mut self.load_file,
            Operation::WordCount => &mut self.word_count,
            Operation::SearchWord => &mut self.search_word,
            Operation::AddText => &mut self.add_text,
        }
    }
}

impl Default for OperationLogs {
    fn default() -> Self {
        Self::from_routes(Arc::new(NativeFileSystem::new()), &LogRoutes::default())
    }
}

/// Builder for [`Document`]
///
/// Defaults: native file system, [`LogRoutes::default`] routing, no-op
/// diagnostics logger.
pub struct DocumentBuilder {
    path: PathBuf,
    fs: Option<Arc<dyn VirtualFileSystem>>,
    logs: Option<OperationLogs>,
    logger: Arc<Logger>,
}

impl DocumentBuilder {
    /// File system the document is read from
    pub fn fs(mut self, fs: Arc<dyn VirtualFileSystem>) -> Self {
        self.fs = Some(fs);
        self
    }

    pub fn logs(mut self, logs: OperationLogs) -> Self {
        self.logs = Some(logs);
        self
    }

    /// Diagnostics logger (not the call logs)
    pub fn logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Construct the document; the construction itself is recorded
    ///
    /// The record carries the path as its argument and `()` as its result.
    pub fn build(self) -> Result<Document, LogError> {
        let fs = self
            .fs
            .unwrap_or_else(|| Arc::new(NativeFileSystem::new()));
        let logs = self
            .logs
            .unwrap_or_else(|| OperationLogs::from_routes(Arc::clone(&fs), &LogRoutes::default()));
        let args = CallArgs::new(&(&self.path,));

        logs.get(Operation::New)
            .record(Operation::New.as_str(), args, || ())?;

        Ok(Document {
            path: self.path,
            content: None,
            fs,
            logs,
            logger: self.logger,
        })
    }
}

/// A text document and its in-memory content buffer
pub struct Document {
    path: PathBuf,
    content: Option<String>,
    fs: Arc<dyn VirtualFileSystem>,
    logs: OperationLogs,
    logger: Arc<Logger>,
}

impl Document {
    /// Document on the native file system with default log routing
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, LogError> {
        Self::builder(path).build()
    }

    pub fn builder(path: impl Into<PathBuf>) -> DocumentBuilder {
        DocumentBuilder {
            path: path.into(),
            fs: None,
            logs: None,
            logger: Logger::noop(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current buffer; `None` until loaded or appended to
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Read the whole file into the buffer, replacing what was there
    ///
    /// Returns `false` and leaves an empty buffer when the file does not
    /// exist. Other read failures and invalid UTF-8 are errors and leave the
    /// buffer untouched.
    pub fn load_file(&mut self) -> Result<bool, DocError> {
        let log = self.logs.get(Operation::LoadFile).clone();
        log.try_record(Operation::LoadFile.as_str(), CallArgs::none(), || {
            self.read_content()
        })
    }

    /// Number of whitespace-separated words; 0 when unset or empty
    pub fn word_count(&self) -> Result<usize, LogError> {
        self.logs
            .get(Operation::WordCount)
            .record(Operation::WordCount.as_str(), CallArgs::none(), || {
                count_words(self.content())
            })
    }

    /// Case-insensitive substring search; `false` when unset or empty
    ///
    /// This is not a word-boundary match: `"doc"` is found in `"Document"`.
    pub fn search_word(&self, word: &str) -> Result<bool, LogError> {
        self.logs.get(Operation::SearchWord).record(
            Operation::SearchWord.as_str(),
            CallArgs::new(&(word,)),
            || contains_ignore_case(self.content(), word),
        )
    }

    /// Append a newline and `new_text`; returns the buffer length in chars
    pub fn add_text(&mut self, new_text: &str) -> Result<usize, LogError> {
        let log = self.logs.get(Operation::AddText).clone();
        log.record(Operation::AddText.as_str(), CallArgs::new(&(new_text,)), || {
            let content = self.content.get_or_insert_with(String::new);
            content.push('\n');
            content.push_str(new_text);
            let len = content.chars().count();
            debug!(self.logger, "appended {} chars to {}", new_text.chars().count(), self.path.display());
            len
        })
    }

    fn read_content(&mut self) -> Result<bool, DocError> {
        match self.fs.read_file(&self.path) {
            Ok(bytes) => {
                let text = String::from_utf8(bytes).map_err(|source| DocError::Encoding {
                    path: self.path.clone(),
                    source,
                })?;
                debug!(self.logger, "loaded {} ({} bytes)", self.path.display(), text.len());
                self.content = Some(text);
                Ok(true)
            }
            Err(e) if e.is_not_found() => {
                warn!(self.logger, "{} not found, starting empty", self.path.display());
                self.content = Some(String::new());
                Ok(false)
            }
            Err(source) => Err(DocError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("path", &self.path)
            .field("content", &self.content)
            .finish()
    }
}

fn count_words(content: Option<&str>) -> usize {
    content.map_or(0, |text| text.split_whitespace().count())
}

fn contains_ignore_case(content: Option<&str>, word: &str) -> bool {
    match content {
        Some(text) if !text.is_empty() => text.to_lowercase().contains(&word.to_lowercase()),
        _ => false,
    }
}
