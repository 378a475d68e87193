//! docprobe-log - leveled diagnostics logging
//!
//! Internal diagnostics for the Docprobe crates. Properties:
//! - **Explicit passing**: there is no global logger; an `Arc<Logger>` is
//!   handed to whatever needs one.
//! - **Non-blocking capture**: the ring buffer keeps the last N records and
//!   overwrites the oldest when full.
//! - **Separate from call logs**: the per-call records written by
//!   `docprobe-core::instrument` never pass through this crate.
//!
//! # Quick start
//!
//! ```toml
//! [dependencies]
//! docprobe-log = { version = "0.1", features = ["file"] }
//! ```
//!
//! ```
//! use docprobe_log::{debug, Level, LogConfig};
//!
//! let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).try_init().unwrap();
//! debug!(logger, "loaded {} bytes", 42);
//! assert_eq!(ring.unwrap().len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use record::{Level, Record};

// trace!, debug!, info!, warn!, error!, log! are exported at the crate root
// through #[macro_export].

pub use config::{LogConfig, OutputConfig};
#[cfg(feature = "file")]
pub use logger::FileSink;
pub use logger::{LogSink, Logger};
pub use ring_buffer::LogRingBuffer;

/// Result type for fallible logging setup
pub type Result<T> = std::result::Result<T, Error>;

/// Logging setup error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file sink could not be opened
    #[error("cannot open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The requested output is not compiled in
    #[error("output '{0}' is not enabled in this build")]
    Unsupported(&'static str),
}
