//! Docprobe CLI
//!
//! Inspect a text file (word count, case-insensitive search, append) with
//! every document operation recorded to a call log.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

mod config;
mod demo;
mod error;
mod logging;

use crate::config::Overrides;
use crate::error::CliError;
use crate::logging::LogFormat;
use docprobe_log::LogRingBuffer;
use docprobe_vfs::{NativeFileSystem, VirtualFileSystem};

#[derive(Parser)]
#[command(
    name = "docprobe",
    about = "Inspect text files with every operation logged",
    version
)]
struct Cli {
    /// Configuration file (default: ./docprobe.json when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Send every document operation's call records to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Diagnostics level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Diagnostics output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the demonstration on the sample document (default)
    Demo,
    /// Print the number of words in FILE
    Count { file: PathBuf },
    /// Print whether FILE contains WORD, ignoring case
    Search { file: PathBuf, word: String },
    /// Append TEXT to FILE in memory and print the new size
    Append {
        file: PathBuf,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let (ctx, ring) = match setup(&cli) {
        Ok(setup) => setup,
        Err(e) => fail(&e, None),
    };
    if let Err(e) = execute(&ctx, cli.command.unwrap_or(Command::Demo)) {
        fail(&e, ring.as_deref());
    }
}

fn fail(err: &CliError, ring: Option<&LogRingBuffer>) -> ! {
    let _ = logging::report_failure(&mut io::stderr().lock(), err, ring);
    process::exit(1)
}

/// Configuration, tracing and diagnostics
fn setup(cli: &Cli) -> Result<(demo::Context, Option<Arc<LogRingBuffer>>), CliError> {
    let fs: Arc<dyn VirtualFileSystem> = Arc::new(NativeFileSystem::new());

    let overrides = Overrides {
        log: cli.log.clone(),
        log_level: cli.log_level.clone(),
    };
    let env_level = std::env::var(config::LOG_ENV).ok();
    let probe_config = config::load(fs.as_ref(), cli.config.as_deref())?;
    let probe_config = config::apply(probe_config, &overrides, env_level.as_deref())?;

    logging::init(config::tracing_level(probe_config.log_level), cli.format);
    let (logger, ring) = logging::diagnostics(&probe_config)?;

    let ctx = demo::Context {
        fs,
        config: probe_config,
        logger,
    };
    Ok((ctx, ring))
}

fn execute(ctx: &demo::Context, command: Command) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Demo => demo::run(ctx, &mut out)?,
        Command::Count { file } => demo::count(ctx, &file, &mut out)?,
        Command::Search { file, word } => demo::search(ctx, &file, &word, &mut out)?,
        Command::Append { file, text } => demo::append(ctx, &file, &text.join(" "), &mut out)?,
    }
    out.flush()?;
    Ok(())
}
