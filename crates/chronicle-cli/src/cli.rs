//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chronicle CLI - Analyze a document corpus into timeline and
/// relationship artifacts.
#[derive(Debug, Parser)]
#[command(name = "chronicle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline: ingest, graph, all artifacts
    Analyze(AnalyzeArgs),

    /// Rebuild only the relationship artifacts
    Relationships(RelationshipsArgs),

    /// Verify previously emitted artifacts against the corpus
    Verify(VerifyArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Corpus path (JSON array file or directory of record files)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Output directory for artifacts
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Minimum Jaccard similarity for a relationship (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Minimum documents a keyword must appear in to be tracked
    #[arg(long)]
    pub min_keyword_occurrences: Option<usize>,

    /// Minimum keyword length in characters
    #[arg(long)]
    pub min_keyword_length: Option<usize>,
}

/// Arguments for the relationships command.
#[derive(Debug, Parser)]
pub struct RelationshipsArgs {
    /// Corpus path (JSON array file or directory of record files)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Output directory for artifacts
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Minimum Jaccard similarity for a relationship (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Corpus path the artifacts were built from
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Artifact directory to verify
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Threshold the artifacts were built with (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "chronicle",
            "analyze",
            "--corpus",
            "docs.json",
            "--threshold",
            "0.6",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.corpus.unwrap().to_str().unwrap(), "docs.json");
                assert_eq!(args.threshold, Some(0.6));
                assert!(args.min_keyword_occurrences.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["chronicle", "--no-color", "verify"]);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Verify(_)));
    }

    #[test]
    fn test_relationships_command() {
        let cli = Cli::parse_from(["chronicle", "relationships", "--out", "artifacts"]);
        match cli.command {
            Command::Relationships(args) => {
                assert_eq!(args.out.unwrap().to_str().unwrap(), "artifacts");
            }
            _ => panic!("Expected Relationships command"),
        }
    }
}
