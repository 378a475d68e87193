//! Core error types

use docprobe_vfs::VfsError;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// A call record could not be appended to its log
///
/// The instrumented operation already ran; its result is discarded.
#[derive(Error, Debug)]
#[error("cannot append call record to '{}': {source}", .path.display())]
pub struct LogError {
    pub path: PathBuf,
    #[source]
    pub source: VfsError,
}

/// Document operation error
#[derive(Error, Debug)]
pub enum DocError {
    /// Reading the document failed for a reason other than absence
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: VfsError,
    },

    /// The document is not valid UTF-8
    #[error("'{}' is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The call record for the operation could not be written
    #[error(transparent)]
    Log(#[from] LogError),
}
