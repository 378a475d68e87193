//! Demo driver and single-operation commands

use crate::error::CliError;
use crate::logging::CLI_TARGET;
use docprobe_config::ProbeConfig;
use docprobe_core::{CallLog, Document, OperationLogs};
use docprobe_log::Logger;
use docprobe_vfs::VirtualFileSystem;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Value returned by the demo driver
pub const DEMO_RESULT: &str = "Processing completed successfully";

const RULE: &str = "==================================================";

/// Shared handles for one CLI run
pub struct Context {
    pub fs: Arc<dyn VirtualFileSystem>,
    pub config: ProbeConfig,
    pub logger: Arc<Logger>,
}

impl Context {
    fn open(&self, path: &Path) -> Result<Document, CliError> {
        let logs = OperationLogs::from_routes(Arc::clone(&self.fs), &self.config.routes);
        let doc = Document::builder(path)
            .fs(Arc::clone(&self.fs))
            .logs(logs)
            .logger(Arc::clone(&self.logger))
            .build()?;
        Ok(doc)
    }

    fn open_loaded(&self, path: &Path, out: &mut dyn Write) -> Result<Document, CliError> {
        let mut doc = self.open(path)?;
        if !doc.load_file()? {
            writeln!(out, "'{}' not found, treating it as empty", path.display())?;
        }
        Ok(doc)
    }
}

/// Full demonstration
///
/// Clears old call logs, bootstraps the sample document, runs the
/// instrumented driver against the app log, then prints every log.
pub fn run(ctx: &Context, out: &mut dyn Write) -> Result<(), CliError> {
    let mut logs = vec![ctx.config.app_log.clone()];
    for path in ctx.config.routes.distinct_paths() {
        if !logs.contains(&path) {
            logs.push(path);
        }
    }

    for path in &logs {
        if ctx.fs.exists(path) {
            ctx.fs.remove_file(path)?;
            tracing::debug!(target: CLI_TARGET, log = %path.display(), "removed stale call log");
        }
    }

    let app_log = CallLog::new(Arc::clone(&ctx.fs), ctx.config.app_log.clone());
    let mut driver = app_log
        .wrap("main", |_: ()| -> Result<&'static str, CliError> {
            drive(ctx, &mut *out)?;
            Ok(DEMO_RESULT)
        })
        .with_doc("Walks a sample document through every operation");
    tracing::info!(target: CLI_TARGET, driver = driver.name(), "starting demo");
    let result = driver.try_call_mut(())?;
    drop(driver);

    writeln!(out, "\n{}", result)?;

    for path in &logs {
        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "Contents of {}:", path.display())?;
        writeln!(out, "{}", RULE)?;
        let bytes = ctx.fs.read_file(path)?;
        writeln!(out, "{}", String::from_utf8_lossy(&bytes))?;
    }
    Ok(())
}

fn drive(ctx: &Context, out: &mut dyn Write) -> Result<(), CliError> {
    let document = &ctx.config.document;
    if !ctx.fs.exists(document) {
        ctx.fs
            .write_file(document, ctx.config.sample_text.as_bytes())?;
        writeln!(out, "Created {}", document.display())?;
    }

    let mut doc = ctx.open(document)?;
    doc.load_file()?;

    writeln!(out, "Word count: {}", doc.word_count()?)?;
    for word in ["документ", "Python", "тестовый"] {
        writeln!(out, "Contains '{}': {}", word, doc.search_word(word)?)?;
    }

    doc.add_text("Добавленный текст для примера.")?;
    writeln!(out, "New word count: {}", doc.word_count()?)?;
    Ok(())
}

/// `docprobe count FILE`
pub fn count(ctx: &Context, path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    let doc = ctx.open_loaded(path, out)?;
    writeln!(out, "{}", doc.word_count()?)?;
    Ok(())
}

/// `docprobe search FILE WORD`
pub fn search(ctx: &Context, path: &Path, word: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let doc = ctx.open_loaded(path, out)?;
    writeln!(out, "{}", doc.search_word(word)?)?;
    Ok(())
}

/// `docprobe append FILE TEXT`; the file itself is not modified
pub fn append(ctx: &Context, path: &Path, text: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let mut doc = ctx.open_loaded(path, out)?;
    let len = doc.add_text(text)?;
    writeln!(out, "{} chars, {} words", len, doc.word_count()?)?;
    Ok(())
}
