//! Medix dashboard CLI.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use medix_dashboard::app::{self, Command};
use medix_dashboard::{DashboardConfig, OutputFormat};

/// Render Medix conversion progress and catalog reports in the terminal.
#[derive(Parser, Debug)]
#[command(name = "medix-dashboard")]
#[command(about = "Render Medix conversion progress and catalog reports")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (overrides config).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Colour the bars.
    #[arg(long, global = true)]
    color: bool,

    /// Bar width in cells (overrides config).
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Start with every section expanded.
    #[arg(long, global = true)]
    expand: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = DashboardConfig::discover(args.config.as_deref())?;

    // CLI overrides
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(format) = args.format {
        config.output = format;
    }
    if args.color {
        config.bar.color = true;
    }
    if let Some(width) = args.width {
        config.bar.width = width;
    }
    config.validate()?;

    medix_common::init_tracing(&config.logging)?;
    debug!(command = ?args.command, output = ?config.output, "Starting Medix dashboard");

    let bytes = app::run(&args.command, &config, args.expand).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;

    Ok(())
}
