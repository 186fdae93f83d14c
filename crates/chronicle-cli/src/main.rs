//! Chronicle CLI - Command-line interface for the Chronicle corpus analyzer.

use chronicle_cli::commands;
use chronicle_cli::{Cli, Command, Config, Formatter};
use clap::Parser;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> chronicle_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config: explicit file if given, otherwise the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter)?,
        Command::Relationships(args) => {
            commands::execute_relationships(args, &config, &formatter)?
        }
        Command::Verify(args) => commands::execute_verify(args, &config, &formatter)?,
    }

    Ok(())
}
