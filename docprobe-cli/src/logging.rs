//! CLI logging setup
//!
//! Progress messages of the CLI itself go through `tracing-subscriber`.
//! Document diagnostics use `docprobe-log`: they are kept in a ring buffer,
//! optionally copied to a file, and dumped to stderr when a command fails.
//! Call records go to call logs and never pass through here.

use crate::config;
use crate::error::CliError;
use clap::ValueEnum;
use docprobe_config::ProbeConfig;
use docprobe_log::{LogConfig, LogRingBuffer, Logger};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

/// Target used by CLI progress messages
pub const CLI_TARGET: &str = "docprobe::cli";

/// Diagnostics kept for the failure report
pub const DIAGNOSTICS_CAPACITY: usize = 256;

/// Output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, colored
    Pretty,
    /// Single line, no timestamps
    #[default]
    Compact,
    /// JSON lines for tooling
    Json,
}

/// Install the global subscriber, writing to stderr
///
/// Does nothing if a subscriber is already installed.
pub fn init(level: LevelFilter, format: LogFormat) {
    let targets = Targets::new()
        .with_default(LevelFilter::WARN.min(level))
        .with_target(CLI_TARGET, level);

    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

/// Diagnostics logger for documents
///
/// A silent level yields a logger with no outputs and no ring buffer.
pub fn diagnostics(
    probe: &ProbeConfig,
) -> Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>), CliError> {
    let Some(level) = config::diagnostics_level(probe.log_level) else {
        return Ok((Logger::noop(), None));
    };

    let mut log_config = LogConfig::new(level).with_ring_buffer(DIAGNOSTICS_CAPACITY);
    if let Some(path) = &probe.diagnostics_log {
        log_config = log_config.with_file(path.to_string_lossy().to_string());
    }
    Ok(log_config.try_init()?)
}

/// Print `err`, then whatever diagnostics the ring buffer still holds
pub fn report_failure(
    out: &mut dyn io::Write,
    err: &CliError,
    ring: Option<&LogRingBuffer>,
) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    if let Some(ring) = ring.filter(|ring| !ring.is_empty()) {
        writeln!(out, "Recent diagnostics:")?;
        writeln!(out, "{}", ring.dump())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docprobe_config::LogLevel;
    use docprobe_log::{warn, Level};
    use std::path::PathBuf;

    #[test]
    fn test_diagnostics_silent_has_no_outputs() {
        let mut config = ProbeConfig::default();
        config.log_level = LogLevel::Silent;

        let (logger, ring) = diagnostics(&config).unwrap();
        assert!(ring.is_none());
        assert!(!logger.is_enabled(Level::Warn));
    }

    #[test]
    fn test_diagnostics_captured_in_ring() {
        let (logger, ring) = diagnostics(&ProbeConfig::default()).unwrap();
        let ring = ring.unwrap();

        warn!(logger, "sample.txt not found");
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_diagnostics_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag.log");
        let mut config = ProbeConfig::default();
        config.diagnostics_log = Some(path.clone());

        let (logger, _ring) = diagnostics(&config).unwrap();
        warn!(logger, "written to disk");

        assert!(std::fs::read_to_string(&path).unwrap().contains("written to disk"));
    }

    #[test]
    fn test_diagnostics_bad_file_fails() {
        let mut config = ProbeConfig::default();
        config.diagnostics_log = Some(PathBuf::from("/no/such/dir/diag.log"));

        let err = diagnostics(&config).err().unwrap();
        assert!(matches!(err, CliError::Diagnostics(_)));
    }

    #[test]
    fn test_report_failure_dumps_ring() {
        let (logger, ring) = diagnostics(&ProbeConfig::default()).unwrap();
        warn!(logger, "ghost.txt not found, starting empty");

        let mut out = Vec::new();
        let err = CliError::UnknownLevel(String::from("chatty"));
        report_failure(&mut out, &err, ring.as_deref()).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error: unknown log level 'chatty'"));
        assert!(out.contains("Recent diagnostics:"));
        assert!(out.contains("WARN"));
        assert!(out.contains("ghost.txt not found"));
    }

    #[test]
    fn test_report_failure_without_diagnostics() {
        let mut out = Vec::new();
        let err = CliError::UnknownLevel(String::from("chatty"));
        report_failure(&mut out, &err, None).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: unknown log level 'chatty' (expected silent, error, warn, info, debug or trace)\n"
        );
    }
}
