use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ascii_canvas::{load_config, Session};

/// Interactive ASCII drawing canvas
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log informational events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug events to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so they never mix with the rendered canvas
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting ascii-canvas version {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, config);

    session.run().context("session terminated")?;
    Ok(())
}
