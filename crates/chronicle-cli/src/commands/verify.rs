//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chronicle_emit::verify_artifacts;
use chronicle_graph::GraphConfig;
use chronicle_ingest::{load_corpus, IngestConfig};
use tracing::info;

/// Execute the verify command: re-parse the emitted artifacts and check
/// them against the corpus they were built from. Exits non-zero when any
/// invariant is violated.
pub fn execute_verify(args: VerifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let corpus_path = config.resolve_corpus(args.corpus)?;
    let out_dir = config.resolve_out(args.out);
    let threshold = args.threshold.unwrap_or(config.analysis.threshold);

    info!(
        "Verifying artifacts in {} against {}",
        out_dir.display(),
        corpus_path.display()
    );

    let corpus = load_corpus(&corpus_path, &IngestConfig::default())?;
    let graph_config = GraphConfig::default().with_threshold(threshold);
    let report = verify_artifacts(&out_dir, &corpus.documents, &graph_config)?;

    println!("{}", formatter.verify_report(&report)?);

    if !report.is_ok() {
        return Err(CliError::VerificationFailed(report.problems.len()));
    }

    Ok(())
}
