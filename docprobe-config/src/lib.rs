//! Docprobe Config - Pure configuration data structures
//!
//! This crate contains only data structures, no I/O or global state.
//! It is the shared configuration vocabulary across all Docprobe crates.

use serde::Deserialize;
use std::path::PathBuf;

/// Default call log shared by every document operation
pub const DEFAULT_DOCUMENT_LOG: &str = "document_processor.log";

/// Default call log for the demo driver
pub const DEFAULT_APP_LOG: &str = "app.log";

/// Default sample document path
pub const DEFAULT_DOCUMENT: &str = "sample.txt";

/// Text written to the sample document when it does not exist
pub const DEFAULT_SAMPLE_TEXT: &str = "Это тестовый документ.\nОн содержит несколько слов.";

/// Instrumented document operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    New,
    LoadFile,
    WordCount,
    SearchWord,
    AddText,
}

impl Operation {
    /// All operations in declaration order
    pub const ALL: [Operation; 5] = [
        Operation::New,
        Operation::LoadFile,
        Operation::WordCount,
        Operation::SearchWord,
        Operation::AddText,
    ];

    /// Name recorded in call logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::New => "new",
            Operation::LoadFile => "load_file",
            Operation::WordCount => "word_count",
            Operation::SearchWord => "search_word",
            Operation::AddText => "add_text",
        }
    }
}

/// Diagnostics log level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// No diagnostics at all
    Silent,
}

impl LogLevel {
    /// Parse a level name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" => Some(LogLevel::Silent),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Per-operation call log destinations
///
/// Every field is optional in JSON; missing entries fall back to
/// [`DEFAULT_DOCUMENT_LOG`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogRoutes {
    pub new: PathBuf,
    pub load_file: PathBuf,
    pub word_count: PathBuf,
    pub search_word: PathBuf,
    pub add_text: PathBuf,
}

impl LogRoutes {
    /// Route every operation to the same log file
    pub fn uniform(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            new: path.clone(),
            load_file: path.clone(),
            word_count: path.clone(),
            search_word: path.clone(),
            add_text: path,
        }
    }

    /// Log path for one operation
    pub fn path_for(&self, op: Operation) -> &PathBuf {
        match op {
            Operation::New => &self.new,
            Operation::LoadFile => &self.load_file,
            Operation::WordCount => &self.word_count,
            Operation::SearchWord => &self.search_word,
            Operation::AddText => &self.add_text,
        }
    }

    /// Distinct log paths, in operation order
    pub fn distinct_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for op in Operation::ALL {
            let path = self.path_for(op);
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
        paths
    }
}

impl Default for LogRoutes {
    fn default() -> Self {
        Self::uniform(DEFAULT_DOCUMENT_LOG)
    }
}

/// Top-level configuration, usually read from `docprobe.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Document inspected by the demo
    pub document: PathBuf,
    /// Text used to bootstrap a missing document
    pub sample_text: String,
    /// Call log for the demo driver itself
    pub app_log: PathBuf,
    /// Call logs for document operations
    pub routes: LogRoutes,
    /// Diagnostics level
    pub log_level: LogLevel,
    /// Also append diagnostics to this file
    pub diagnostics_log: Option<PathBuf>,
}

impl ProbeConfig {
    /// Parse configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            sample_text: String::from(DEFAULT_SAMPLE_TEXT),
            app_log: PathBuf::from(DEFAULT_APP_LOG),
            routes: LogRoutes::default(),
            log_level: LogLevel::default(),
            diagnostics_log: None,
        }
    }
}
