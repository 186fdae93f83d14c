//! Relationships command implementation.

use crate::cli::RelationshipsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chronicle_emit::write_relationships;
use chronicle_graph::{build_graph, GraphConfig};
use chronicle_ingest::{load_corpus, IngestConfig};
use tracing::info;

/// Execute the relationships command: rebuild the graph and rewrite only
/// the relationship artifacts, leaving timelines and the index untouched.
pub fn execute_relationships(
    args: RelationshipsArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let corpus_path = config.resolve_corpus(args.corpus)?;
    let out_dir = config.resolve_out(args.out);
    let threshold = args.threshold.unwrap_or(config.analysis.threshold);

    info!(
        "Rebuilding relationships for {} into {}",
        corpus_path.display(),
        out_dir.display()
    );

    let corpus = load_corpus(&corpus_path, &IngestConfig::default())?;
    let graph_config = GraphConfig::default().with_threshold(threshold);
    let graph = build_graph(&corpus.documents, &graph_config)?;

    write_relationships(&out_dir, &graph)?;

    println!("{}", formatter.stats_report(&graph.stats)?);

    Ok(())
}
