//! Artifact verification - re-parse emitted files and cross-check them
//! against the corpus they were built from

use crate::artifact::{IndexFile, KeywordTimelineFile};
use crate::error::{EmitError, Result};
use crate::writer::{INDEX_FILE, RELATIONSHIPS_FILE, STATS_FILE};
use chronicle_domain::{DocId, Document, KeywordSet, RelationshipRecord, RelevanceTier, MAX_RELATED};
use chronicle_graph::{GraphConfig, GraphStats};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of an artifact verification pass
///
/// An unparseable or missing artifact is an error; an artifact that parses
/// but violates an invariant is a recorded problem, so one bad entry does
/// not mask the rest.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Artifact files parsed
    pub artifacts_checked: usize,

    /// Relationship records inspected
    pub records_checked: usize,

    /// Individual related-document entries inspected
    pub entries_checked: usize,

    /// Invariant violations found, human-readable
    pub problems: Vec<String>,
}

impl VerifyReport {
    /// Whether every check passed
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    fn problem(&mut self, message: String) {
        warn!("{}", message);
        self.problems.push(message);
    }
}

/// Verify a previously emitted artifact set against the corpus.
///
/// Re-parses every artifact, recomputes each entry's similarity from the
/// corpus keyword sets, recomputes aggregate statistics from the parsed
/// records, and checks the structural invariants: bounded lists, no
/// self-references, entries at or above the threshold, tiers consistent
/// with similarities, lists sorted strongest-first.
pub fn verify_artifacts(
    out_dir: &Path,
    documents: &[Document],
    graph_config: &GraphConfig,
) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    let keywords_by_id: HashMap<&DocId, &KeywordSet> =
        documents.iter().map(|d| (&d.id, &d.keywords)).collect();

    let index: IndexFile = read_json(out_dir, INDEX_FILE, &mut report)?;
    let records: BTreeMap<DocId, RelationshipRecord> =
        read_json(out_dir, RELATIONSHIPS_FILE, &mut report)?;
    let stats: GraphStats = read_json(out_dir, STATS_FILE, &mut report)?;

    check_index(&index, documents, out_dir, &mut report)?;
    check_records(&records, &keywords_by_id, graph_config, &mut report);

    let recomputed = GraphStats::compute(&records);
    if recomputed != stats {
        report.problem(format!(
            "{} does not match statistics recomputed from {}",
            STATS_FILE, RELATIONSHIPS_FILE
        ));
    }

    info!(
        "Verification complete: {} artifacts, {} records, {} entries, {} problems",
        report.artifacts_checked,
        report.records_checked,
        report.entries_checked,
        report.problems.len()
    );
    Ok(report)
}

fn check_index(
    index: &IndexFile,
    documents: &[Document],
    out_dir: &Path,
    report: &mut VerifyReport,
) -> Result<()> {
    if index.metadata.total_documents != documents.len() {
        report.problem(format!(
            "{}: metadata reports {} documents, corpus has {}",
            INDEX_FILE,
            index.metadata.total_documents,
            documents.len()
        ));
    }
    if index.documents.len() != index.metadata.total_documents {
        report.problem(format!(
            "{}: roster has {} entries, metadata reports {}",
            INDEX_FILE,
            index.documents.len(),
            index.metadata.total_documents
        ));
    }
    if index.top_keywords.len() != index.metadata.keywords_tracked {
        report.problem(format!(
            "{}: {} tracked keywords listed, metadata reports {}",
            INDEX_FILE,
            index.top_keywords.len(),
            index.metadata.keywords_tracked
        ));
    }

    // Every advertised timeline file must exist, parse, and agree with
    // its own counts and the index row.
    for summary in &index.top_keywords {
        let timeline: KeywordTimelineFile = read_json(out_dir, &summary.data_file, report)?;
        if timeline.keyword != summary.keyword {
            report.problem(format!(
                "{}: holds keyword {:?}, index row says {:?}",
                summary.data_file, timeline.keyword, summary.keyword
            ));
        }
        if timeline.timeline.len() != timeline.total_documents
            || timeline.keyword_match_count + timeline.content_match_count
                != timeline.total_documents
        {
            report.problem(format!(
                "{}: entry counts are inconsistent",
                summary.data_file
            ));
        }
        if summary.total_documents != timeline.total_documents {
            report.problem(format!(
                "{}: index row count {} disagrees with file count {}",
                summary.data_file, summary.total_documents, timeline.total_documents
            ));
        }
    }
    Ok(())
}

fn check_records(
    records: &BTreeMap<DocId, RelationshipRecord>,
    keywords_by_id: &HashMap<&DocId, &KeywordSet>,
    config: &GraphConfig,
    report: &mut VerifyReport,
) {
    for (id, record) in records {
        report.records_checked += 1;

        let Some(&own_keywords) = keywords_by_id.get(id) else {
            report.problem(format!("{}: record for unknown document {}", RELATIONSHIPS_FILE, id));
            continue;
        };

        for (direction, entries) in [("previous", &record.previous), ("next", &record.next)] {
            if entries.len() > MAX_RELATED {
                report.problem(format!(
                    "{}: {} {} list exceeds {} entries",
                    RELATIONSHIPS_FILE, id, direction, MAX_RELATED
                ));
            }
            for pair in entries.windows(2) {
                if pair[1].similarity > pair[0].similarity {
                    report.problem(format!(
                        "{}: {} {} list is not sorted strongest-first",
                        RELATIONSHIPS_FILE, id, direction
                    ));
                }
            }
            for entry in entries {
                report.entries_checked += 1;

                if entry.id == *id {
                    report.problem(format!("{}: {} references itself", RELATIONSHIPS_FILE, id));
                }
                if entry.similarity < config.threshold || entry.similarity > 1.0 {
                    report.problem(format!(
                        "{}: {} -> {} similarity {} outside [{}, 1.0]",
                        RELATIONSHIPS_FILE, id, entry.id, entry.similarity, config.threshold
                    ));
                }
                if RelevanceTier::from_similarity(entry.similarity) != Some(entry.tier) {
                    report.problem(format!(
                        "{}: {} -> {} tier does not match similarity {}",
                        RELATIONSHIPS_FILE, id, entry.id, entry.similarity
                    ));
                }
                match keywords_by_id.get(&entry.id) {
                    None => report.problem(format!(
                        "{}: {} references unknown document {}",
                        RELATIONSHIPS_FILE, id, entry.id
                    )),
                    Some(&partner_keywords) => {
                        // Exact recomputation; emission and verification
                        // share the same integer-cardinality arithmetic,
                        // so equality is bit-for-bit.
                        let expected = own_keywords.jaccard(partner_keywords);
                        if expected.to_bits() != entry.similarity.to_bits() {
                            report.problem(format!(
                                "{}: {} -> {} stored similarity {} differs from recomputed {}",
                                RELATIONSHIPS_FILE, id, entry.id, entry.similarity, expected
                            ));
                        }
                    }
                }
            }
        }
    }
}

fn read_json<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
    report: &mut VerifyReport,
) -> Result<T> {
    let path = dir.join(name);
    let bytes = fs::read(&path).map_err(|e| EmitError::io(path.clone(), e))?;
    let value = serde_json::from_slice(&bytes).map_err(|e| EmitError::json(path, e))?;
    report.artifacts_checked += 1;
    Ok(value)
}
