//! Logger implementation

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// Log output target
pub trait LogSink: Send + Sync {
    /// Write one record
    fn write(&self, record: &Record);
}

/// Logger level and sinks
pub struct Logger {
    level: AtomicU8,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// Create a new logger without sinks
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// Add a sink, builder style
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// Add a sink to a shared logger
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        if let Ok(mut sinks) = self.sinks.lock() {
            sinks.push(Box::new(sink));
        }
    }

    /// Current level
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// Whether records at `level` are emitted
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Emit a record to every sink
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        if let Ok(sinks) = self.sinks.lock() {
            for sink in sinks.iter() {
                sink.write(&record);
            }
        }
    }

    /// Logger that drops everything (used as the default for documents)
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }
}

#[cfg(feature = "file")]
/// File sink (append mode)
pub struct FileSink {
    file: Mutex<std::fs::File>,
}

#[cfg(feature = "file")]
impl FileSink {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| crate::Error::Open {
                path: path.display().to_string(),
                source,
            })?;

        Ok(FileSink {
            file: Mutex::new(file),
        })
    }
}

#[cfg(feature = "file")]
impl LogSink for FileSink {
    #[inline(never)]
    fn write(&self, record: &Record) {
        use std::io::Write;
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", record.format());
        }
    }
}
