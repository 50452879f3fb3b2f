//! Command-line front end for the virtual shell.
//!
//! Builds a [`Session`] from flags, settings and an optional seed manifest,
//! then either runs `-c` commands or reads lines from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use vfsh::config::Settings;
use vfsh::core::error::{ConfigError, ManifestError};
use vfsh::core::{Session, load_manifest};

/// Line that ends the interactive loop.
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Parser)]
#[command(name = "vfsh", version, about = "In-memory virtual filesystem shell")]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed tree manifest (JSON); overrides the settings file
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// User name shown in the prompt
    #[arg(long)]
    pub user: Option<String>,

    /// Run a command and exit (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Merge the settings file with flags.
pub fn resolve_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(user) = &cli.user {
        settings.shell.user = user.clone();
    }
    if let Some(manifest) = &cli.manifest {
        settings.filesystem.manifest = Some(manifest.clone());
    }
    Ok(settings)
}

/// Build the session described by `settings`.
pub fn build_session(settings: &Settings) -> Result<Session, CliError> {
    let files = match &settings.filesystem.manifest {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading manifest");
            load_manifest(path)?
        }
        None => Vec::new(),
    };
    Ok(Session::with_settings(files, &settings.shell))
}

/// Run each line in order, writing non-empty output.
pub fn run_commands<W: Write>(
    session: &mut Session,
    lines: &[String],
    out: &mut W,
) -> io::Result<()> {
    for line in lines {
        write_output(out, &session.execute(line))?;
    }
    Ok(())
}

/// Interactive loop: prompt, read, execute, print. Ends on `exit` or EOF.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", session.prompt())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim() == EXIT_COMMAND {
            break;
        }
        write_output(out, &session.execute(&line))?;
        write!(out, "{}", session.prompt())?;
        out.flush()?;
    }

    Ok(())
}

fn write_output<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
