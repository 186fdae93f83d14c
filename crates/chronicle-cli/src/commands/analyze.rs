//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chronicle_emit::{write_full, EmitConfig};
use chronicle_graph::{build_graph, GraphConfig};
use chronicle_ingest::{load_corpus, IngestConfig};
use tracing::info;

/// Execute the analyze command: ingest the corpus, build the relationship
/// graph, and write the complete artifact set.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let corpus_path = config.resolve_corpus(args.corpus)?;
    let out_dir = config.resolve_out(args.out);
    let threshold = args.threshold.unwrap_or(config.analysis.threshold);

    info!(
        "Analyzing corpus {} into {}",
        corpus_path.display(),
        out_dir.display()
    );

    let corpus = load_corpus(&corpus_path, &IngestConfig::default())?;
    let graph_config = GraphConfig::default().with_threshold(threshold);
    let graph = build_graph(&corpus.documents, &graph_config)?;

    let emit_config = EmitConfig {
        min_keyword_occurrences: args
            .min_keyword_occurrences
            .unwrap_or(config.analysis.min_keyword_occurrences),
        min_keyword_length: args
            .min_keyword_length
            .unwrap_or(config.analysis.min_keyword_length),
        ..EmitConfig::default()
    };
    let report = write_full(
        &out_dir,
        &corpus.documents,
        corpus.skipped,
        &graph,
        &graph_config,
        &emit_config,
    )?;

    println!(
        "{}",
        formatter.analyze_summary(
            corpus.documents.len(),
            corpus.skipped,
            &graph.stats,
            &report,
            &out_dir,
        )?
    );

    Ok(())
}
