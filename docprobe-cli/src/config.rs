//! CLI configuration
//!
//! Combines `docprobe.json`, command-line overrides and `DOCPROBE_LOG`.

use crate::error::CliError;
use docprobe_config::{LogLevel, LogRoutes, ProbeConfig};
use docprobe_vfs::VirtualFileSystem;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "docprobe.json";

/// Environment variable overriding the diagnostics level
pub const LOG_ENV: &str = "DOCPROBE_LOG";

/// Overrides taken from the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub log: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, `docprobe.json` is used when
/// present and defaults otherwise.
pub fn load(fs: &dyn VirtualFileSystem, path: Option<&Path>) -> Result<ProbeConfig, CliError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !fs.exists(&path) {
        return Ok(ProbeConfig::default());
    }

    let bytes = fs.read_file(&path).map_err(|source| CliError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(source) => return Err(CliError::ConfigEncoding { path, source }),
    };
    ProbeConfig::from_json(&text).map_err(|source| CliError::ParseConfig { path, source })
}

/// Apply command-line overrides and the environment on top of `config`
pub fn apply(
    mut config: ProbeConfig,
    overrides: &Overrides,
    env_level: Option<&str>,
) -> Result<ProbeConfig, CliError> {
    if let Some(log) = &overrides.log {
        config.routes = LogRoutes::uniform(log.clone());
    }

    // flag beats environment beats file
    let level = overrides.log_level.as_deref().or(env_level);
    if let Some(name) = level {
        config.log_level =
            LogLevel::parse(name).ok_or_else(|| CliError::UnknownLevel(name.to_string()))?;
    }

    Ok(config)
}

/// Filter for `tracing` output; `silent` turns it off
pub fn tracing_level(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Silent => LevelFilter::OFF,
    }
}

/// Level for document diagnostics; `None` when silent
pub fn diagnostics_level(level: LogLevel) -> Option<docprobe_log::Level> {
    match level {
        LogLevel::Trace => Some(docprobe_log::Level::Trace),
        LogLevel::Debug => Some(docprobe_log::Level::Debug),
        LogLevel::Info => Some(docprobe_log::Level::Info),
        LogLevel::Warn => Some(docprobe_log::Level::Warn),
        LogLevel::Error => Some(docprobe_log::Level::Error),
        LogLevel::Silent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docprobe_config::{Operation, DEFAULT_DOCUMENT_LOG};
    use docprobe_vfs::MemoryFileSystem;

    #[test]
    fn test_load_defaults_without_file() {
        let fs = MemoryFileSystem::new();
        assert_eq!(load(&fs, None).unwrap(), ProbeConfig::default());
    }

    #[test]
    fn test_load_default_file_when_present() {
        let fs = MemoryFileSystem::with_files([(
            DEFAULT_CONFIG_FILE,
            br#"{ "document": "notes.txt" }"#.to_vec(),
        )]);
        let config = load(&fs, None).unwrap();
        assert_eq!(config.document, PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let fs = MemoryFileSystem::new();
        let err = load(&fs, Some(Path::new("custom.json"))).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let fs = MemoryFileSystem::with_files([("bad.json", b"{ nope".to_vec())]);
        let err = load(&fs, Some(Path::new("bad.json"))).unwrap_err();
        assert!(matches!(err, CliError::ParseConfig { .. }));
    }

    #[test]
    fn test_apply_log_override_reroutes_everything() {
        let overrides = Overrides {
            log: Some(PathBuf::from("one.log")),
            log_level: None,
        };
        let config = apply(ProbeConfig::default(), &overrides, None).unwrap();

        for op in Operation::ALL {
            assert_eq!(config.routes.path_for(op), &PathBuf::from("one.log"));
        }
    }

    #[test]
    fn test_apply_level_precedence() {
        let flag = Overrides {
            log: None,
            log_level: Some(String::from("trace")),
        };
        let config = apply(ProbeConfig::default(), &flag, Some("warn")).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);

        let config = apply(ProbeConfig::default(), &Overrides::default(), Some("warn")).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(
            config.routes.path_for(Operation::New),
            &PathBuf::from(DEFAULT_DOCUMENT_LOG)
        );
    }

    #[test]
    fn test_apply_unknown_level() {
        let err = apply(ProbeConfig::default(), &Overrides::default(), Some("chatty")).unwrap_err();
        assert!(matches!(err, CliError::UnknownLevel(name) if name == "chatty"));
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(tracing_level(LogLevel::Debug), LevelFilter::DEBUG);
        assert_eq!(diagnostics_level(LogLevel::Warn), Some(docprobe_log::Level::Warn));
    }

    #[test]
    fn test_silent_turns_everything_off() {
        let flag = Overrides {
            log: None,
            log_level: Some(String::from("silent")),
        };
        let config = apply(ProbeConfig::default(), &flag, None).unwrap();

        assert_eq!(config.log_level, LogLevel::Silent);
        assert_eq!(tracing_level(config.log_level), LevelFilter::OFF);
        assert_eq!(diagnostics_level(config.log_level), None);
    }

    #[test]
    fn test_load_invalid_utf8_is_an_encoding_error() {
        let fs = MemoryFileSystem::with_files([("bad.json", vec![b'{', 0xff, 0xfe, b'}'])]);
        let err = load(&fs, Some(Path::new("bad.json"))).unwrap_err();

        assert!(matches!(err, CliError::ConfigEncoding { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
