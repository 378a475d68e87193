//! Call instrumentation
//!
//! An instrumented call runs the wrapped operation, then appends exactly one
//! line to its call log and hands the result back unchanged:
//!
//! ```text
//! 2024-03-01 12:00:00 - Function: search_word - Arguments: args=("doc",), kwargs={} - Result: true
//! ```
//!
//! Ordering is compute, then log, then return. An operation that fails
//! writes nothing. A log that cannot be appended to fails the call and the
//! computed result is dropped.
//!
//! Appends to one path are serialized process-wide, so concurrent callers
//! never interleave partial lines.

use crate::error::LogError;
use chrono::{Local, NaiveDateTime};
use docprobe_vfs::{NativeFileSystem, VirtualFileSystem};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Timestamp layout of call records (local clock, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static APPEND_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Process-wide append lock for `path`
fn append_lock(path: &Path) -> Arc<Mutex<()>> {
    let key = lock_key(path);
    let mut locks = APPEND_LOCKS.lock().unwrap_or_else(|e| e.into_inner());
    Arc::clone(locks.entry(key).or_default())
}

/// Absolute, lexically normalized form of `path`
///
/// `app.log`, `./app.log` and `logs/../app.log` map to one key. Symlinks are
/// not resolved.
fn lock_key(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut key = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !key.pop() {
                    key.push(component);
                }
            }
            other => key.push(other),
        }
    }
    key
}

/// Rendered arguments of one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgs {
    positional: String,
    keyword: Vec<(String, String)>,
}

impl CallArgs {
    /// Positional arguments, rendered with `Debug` (normally a tuple)
    pub fn new<A: fmt::Debug + ?Sized>(args: &A) -> Self {
        Self {
            positional: format!("{:?}", args),
            keyword: Vec::new(),
        }
    }

    /// No arguments at all
    pub fn none() -> Self {
        Self::new(&())
    }

    /// Add a named argument
    pub fn kwarg<V: fmt::Debug + ?Sized>(mut self, name: &str, value: &V) -> Self {
        self.keyword.push((name.to_string(), format!("{:?}", value)));
        self
    }

    pub fn positional(&self) -> &str {
        &self.positional
    }

    /// Named arguments as `{name: value, ...}`
    pub fn keyword(&self) -> String {
        let pairs: Vec<String> = self
            .keyword
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }
}

/// One call log line
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub timestamp: NaiveDateTime,
    pub name: String,
    pub args: CallArgs,
    /// `Debug` rendering of the returned value
    pub result: String,
}

impl CallRecord {
    /// Render the record, trailing newline included
    pub fn format(&self) -> String {
        format!(
            "{} - Function: {} - Arguments: args={}, kwargs={} - Result: {}\n",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.name,
            self.args.positional(),
            self.args.keyword(),
            self.result
        )
    }
}

/// Append-only destination for call records
///
/// Cheap to clone; clones write to the same file under the same lock.
#[derive(Clone)]
pub struct CallLog {
    path: PathBuf,
    fs: Arc<dyn VirtualFileSystem>,
    lock: Arc<Mutex<()>>,
}

impl CallLog {
    pub fn new(fs: Arc<dyn VirtualFileSystem>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            lock: append_lock(&path),
            path,
            fs,
        }
    }

    /// Call log on the native file system
    pub fn native(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(NativeFileSystem::new()), path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, holding the per-path lock for the whole write
    pub fn append(&self, record: &CallRecord) -> Result<(), LogError> {
        let line = record.format();
        let guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let written = self.fs.append_file(&self.path, line.as_bytes());
        drop(guard);
        written.map_err(|source| LogError {
            path: self.path.clone(),
            source,
        })
    }

    /// Run an infallible operation and record it
    pub fn record<R, F>(&self, name: &str, args: CallArgs, op: F) -> Result<R, LogError>
    where
        R: fmt::Debug,
        F: FnOnce() -> R,
    {
        let timestamp = Local::now().naive_local();
        let result = op();
        self.append(&CallRecord {
            timestamp,
            name: name.to_string(),
            args,
            result: format!("{:?}", result),
        })?;
        Ok(result)
    }

    /// Run a fallible operation and record it if it succeeds
    ///
    /// An `Err` from `op` is returned as is and nothing is written.
    pub fn try_record<R, E, F>(&self, name: &str, args: CallArgs, op: F) -> Result<R, E>
    where
        R: fmt::Debug,
        E: From<LogError>,
        F: FnOnce() -> Result<R, E>,
    {
        let timestamp = Local::now().naive_local();
        let result = op()?;
        self.append(&CallRecord {
            timestamp,
            name: name.to_string(),
            args,
            result: format!("{:?}", result),
        })?;
        Ok(result)
    }

    /// Wrap `op` so every call through the wrapper is recorded here
    pub fn wrap<F>(&self, name: &'static str, op: F) -> Instrumented<F> {
        Instrumented {
            name,
            doc: None,
            log: self.clone(),
            op,
        }
    }
}

impl fmt::Debug for CallLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLog").field("path", &self.path).finish()
    }
}

/// An operation paired with the call log that records it
///
/// Keeps the wrapped operation's name and doc line for introspection.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use docprobe_core::CallLog;
/// use docprobe_vfs::MemoryFileSystem;
///
/// let log = CallLog::new(Arc::new(MemoryFileSystem::new()), "app.log");
/// let add = log.wrap("add", |(a, b): (i32, i32)| a + b).with_doc("Adds two numbers");
///
/// assert_eq!(add.call((2, 3)).unwrap(), 5);
/// assert_eq!(add.name(), "add");
/// ```
pub struct Instrumented<F> {
    name: &'static str,
    doc: Option<&'static str>,
    log: CallLog,
    op: F,
}

impl<F> Instrumented<F> {
    pub fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn doc(&self) -> Option<&'static str> {
        self.doc
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    /// Call an infallible operation
    pub fn call<A, R>(&self, args: A) -> Result<R, LogError>
    where
        F: Fn(A) -> R,
        A: fmt::Debug,
        R: fmt::Debug,
    {
        let call_args = CallArgs::new(&args);
        self.log.record(self.name, call_args, || (self.op)(args))
    }

    /// Call a fallible operation; its error passes through unlogged
    pub fn try_call<A, R, E>(&self, args: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        A: fmt::Debug,
        R: fmt::Debug,
        E: From<LogError>,
    {
        let call_args = CallArgs::new(&args);
        self.log.try_record(self.name, call_args, || (self.op)(args))
    }

    /// [`Instrumented::call`] for operations that mutate captured state
    pub fn call_mut<A, R>(&mut self, args: A) -> Result<R, LogError>
    where
        F: FnMut(A) -> R,
        A: fmt::Debug,
        R: fmt::Debug,
    {
        let call_args = CallArgs::new(&args);
        let op = &mut self.op;
        self.log.record(self.name, call_args, || op(args))
    }

    /// [`Instrumented::try_call`] for operations that mutate captured state
    pub fn try_call_mut<A, R, E>(&mut self, args: A) -> Result<R, E>
    where
        F: FnMut(A) -> Result<R, E>,
        A: fmt::Debug,
        R: fmt::Debug,
        E: From<LogError>,
    {
        let call_args = CallArgs::new(&args);
        let op = &mut self.op;
        self.log.try_record(self.name, call_args, || op(args))
    }
}

impl<F> fmt::Debug for Instrumented<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrumented")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("log", &self.log)
            .finish()
    }
}
