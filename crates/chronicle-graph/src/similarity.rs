//! Similarity engine - thresholded Jaccard over candidate pairs

use crate::config::GraphConfig;
use crate::index::InvertedIndex;
use chronicle_domain::{Document, Edge};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Compute every unordered document pair whose Jaccard similarity meets the
/// configured threshold.
///
/// For each document, candidate partners at later corpus positions are
/// gathered through the inverted index; accumulating candidate hits counts
/// shared keywords exactly, so the Jaccard ratio comes from integer
/// cardinalities with a single final division. Each unordered pair is
/// scored at most once (canonical ordering: lower corpus position first).
///
/// Documents with empty keyword sets participate in zero candidate pairs;
/// that is a valid outcome, not an error.
pub fn compute_edges(documents: &[Document], config: &GraphConfig) -> Vec<Edge> {
    let index = InvertedIndex::build(documents);
    info!(
        "Scoring candidate pairs over {} documents, {} distinct keywords",
        documents.len(),
        index.len()
    );

    let mut edges = Vec::new();
    let mut scored: u64 = 0;

    for (pos, doc) in documents.iter().enumerate() {
        // shared-keyword counts for every later candidate partner;
        // BTreeMap keeps candidate order deterministic
        let mut shared: BTreeMap<usize, usize> = BTreeMap::new();
        for keyword in doc.keywords.iter() {
            for &other in index.postings(keyword) {
                if other > pos {
                    *shared.entry(other).or_insert(0) += 1;
                }
            }
        }

        for (other, intersection) in shared {
            if intersection < config.min_shared_keywords {
                continue;
            }

            let len_a = doc.keywords.len();
            let len_b = documents[other].keywords.len();
            // Even full containment cannot reach the threshold when the
            // size ratio is below it. Compared as a division, not a
            // multiplication: the similarity is computed by the same
            // division, so an exactly-at-threshold containment pair is
            // never lost to rounding.
            let (min_len, max_len) = (len_a.min(len_b), len_a.max(len_b));
            if (min_len as f64 / max_len as f64) < config.threshold {
                continue;
            }

            scored += 1;
            let union = len_a + len_b - intersection;
            let similarity = intersection as f64 / union as f64;
            if similarity >= config.threshold {
                edges.push(Edge::new(
                    doc.id.clone(),
                    documents[other].id.clone(),
                    similarity,
                ));
            }
        }
    }

    debug!("Scored {} candidate pairs", scored);
    info!("Retained {} edges at threshold {}", edges.len(), config.threshold);
    edges
}
