//! Logger setup
//!
//! One-call initialization of a logger and its outputs.

use crate::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// Output target
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// Append to a file (needs the `file` feature)
    File(String),
    /// In-memory ring buffer with the given capacity
    RingBuffer(usize),
}

/// Logger configuration
///
/// # Example
///
/// ```
/// use docprobe_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug)
///     .with_ring_buffer(10000)
///     .try_init()
///     .unwrap();
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Minimum level
    pub level: Level,
    /// Outputs, in the order they are attached
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// Build the logger, failing on the first output that cannot be attached
    ///
    /// Returns the last configured ring buffer, if any.
    pub fn try_init(self) -> crate::Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>)> {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            if let Some(ring) = attach(&logger, output)? {
                ring_buffer = Some(ring);
            }
        }

        Ok((logger, ring_buffer))
    }
}

fn attach(logger: &Logger, output: OutputConfig) -> crate::Result<Option<Arc<LogRingBuffer>>> {
    match output {
        #[cfg(feature = "file")]
        OutputConfig::File(path) => logger.add_sink(crate::FileSink::new(&path)?),
        #[cfg(not(feature = "file"))]
        OutputConfig::File(_) => return Err(crate::Error::Unsupported("file")),
        OutputConfig::RingBuffer(capacity) => {
            let ring = LogRingBuffer::new(capacity);
            logger.add_sink(Arc::clone(&ring));
            return Ok(Some(ring));
        }
    }
    Ok(None)
}
