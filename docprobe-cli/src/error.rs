//! CLI errors

use docprobe_core::{DocError, LogError};
use docprobe_vfs::VfsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read config '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: VfsError,
    },

    #[error("config '{}' is not valid UTF-8: {source}", .path.display())]
    ConfigEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown log level '{0}' (expected silent, error, warn, info, debug or trace)")]
    UnknownLevel(String),

    #[error("cannot set up diagnostics: {0}")]
    Diagnostics(#[from] docprobe_log::Error),

    #[error(transparent)]
    Document(#[from] DocError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Fs(#[from] VfsError),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}
