//! Graph orchestration - edges, records, statistics in one pass

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::selector::select_relationships;
use crate::similarity::compute_edges;
use crate::stats::GraphStats;
use chronicle_domain::{DocId, Document, RelationshipRecord};
use std::collections::BTreeMap;
use tracing::info;

/// The complete rebuilt relationship graph
///
/// Rebuilt from scratch on every run; there is no incremental update path.
#[derive(Debug, Clone)]
pub struct RelationGraph {
    /// Every document's bounded relationship record, keyed by id
    pub records: BTreeMap<DocId, RelationshipRecord>,

    /// Exact aggregates over `records`
    pub stats: GraphStats,
}

impl RelationGraph {
    /// Look up a document's record
    pub fn record(&self, id: &DocId) -> Option<&RelationshipRecord> {
        self.records.get(id)
    }
}

/// Build the full relationship graph for a corpus.
///
/// Fails fast on invalid configuration before touching any document.
pub fn build_graph(documents: &[Document], config: &GraphConfig) -> Result<RelationGraph> {
    config.validate().map_err(GraphError::Config)?;

    info!(
        "Building relationship graph: {} documents, threshold {}",
        documents.len(),
        config.threshold
    );

    let edges = compute_edges(documents, config);
    let records = select_relationships(documents, &edges, config.max_related)?;
    let stats = GraphStats::compute(&records);

    info!(
        "Graph complete: {} entries across {} documents ({:.1}% connected)",
        stats.total_relationships, stats.total_documents, stats.pct_documents_with_any
    );

    Ok(RelationGraph { records, stats })
}
