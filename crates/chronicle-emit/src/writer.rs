//! Artifact writing - atomic, deterministic, all-or-nothing

use crate::artifact::{
    DocumentEntry, IndexFile, IndexMetadata, KeywordSummary, KeywordTimelineFile, MatchType,
    TimelineEntry,
};
use crate::error::{EmitError, Result};
use crate::keywords::{select_tracked_keywords, timeline_file_name, TrackedKeyword};
use chronicle_domain::Document;
use chronicle_graph::{GraphConfig, InvertedIndex, RelationGraph};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// File name of the global index artifact
pub const INDEX_FILE: &str = "index.json";
/// File name of the per-document relationship fragments
pub const RELATIONSHIPS_FILE: &str = "relationships.json";
/// File name of the aggregate statistics artifact
pub const STATS_FILE: &str = "relationship_stats.json";
/// File name of the year-grouped timeline artifact
pub const TIMELINE_BY_YEAR_FILE: &str = "timeline_by_year.json";

/// Configuration for artifact emission
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Keyword inclusion floor: minimum documents listing the keyword
    pub min_keyword_occurrences: usize,

    /// Minimum keyword length in characters
    pub min_keyword_length: usize,

    /// Maximum summary excerpt length in the index roster (characters)
    pub summary_excerpt_chars: usize,
}

impl EmitConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_keyword_length == 0 {
            return Err(EmitError::Config(
                "min_keyword_length must be greater than 0".to_string(),
            ));
        }
        if self.summary_excerpt_chars == 0 {
            return Err(EmitError::Config(
                "summary_excerpt_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EmitConfig {
    /// Keywords tracked at 25+ documents, 3+ characters
    fn default() -> Self {
        Self {
            min_keyword_occurrences: 25,
            min_keyword_length: 3,
            summary_excerpt_chars: 280,
        }
    }
}

/// What a full emission produced
#[derive(Debug, Clone)]
pub struct EmitReport {
    /// Artifacts written, index included
    pub artifacts_written: usize,

    /// Keywords that received a timeline file
    pub tracked_keywords: usize,
}

/// Write the complete artifact set for a run.
///
/// Any failure aborts with stage context; per-artifact writes are atomic
/// so a consumer never reads a half-written file under its final name.
pub fn write_full(
    out_dir: &Path,
    documents: &[Document],
    skipped: usize,
    graph: &RelationGraph,
    graph_config: &GraphConfig,
    config: &EmitConfig,
) -> Result<EmitReport> {
    config.validate()?;
    fs::create_dir_all(out_dir).map_err(|e| EmitError::io(out_dir, e))?;

    let index = InvertedIndex::build(documents);
    let tracked = select_tracked_keywords(
        &index,
        config.min_keyword_occurrences,
        config.min_keyword_length,
    );
    info!(
        "Emitting artifacts to {}: {} documents, {} tracked keywords",
        out_dir.display(),
        documents.len(),
        tracked.len()
    );

    let mut artifacts_written = 0;
    let mut summaries = Vec::with_capacity(tracked.len());

    for (i, tk) in tracked.iter().enumerate() {
        let file_name = timeline_file_name(i + 1, &tk.keyword);
        let timeline = keyword_timeline(&tk.keyword, documents, &index);
        let summary = KeywordSummary {
            keyword: tk.keyword.clone(),
            count: tk.count,
            content_match_count: timeline.content_match_count,
            total_documents: timeline.total_documents,
            data_file: file_name.clone(),
        };
        write_json(out_dir, &file_name, &timeline)?;
        artifacts_written += 1;
        summaries.push(summary);
        debug!("Wrote {} ({} entries)", file_name, timeline.timeline.len());
    }

    let index_file = IndexFile {
        metadata: IndexMetadata {
            total_documents: documents.len(),
            skipped_documents: skipped,
            documents_with_timestamps: documents.iter().filter(|d| d.is_dated()).count(),
            total_keywords: index.len(),
            keywords_tracked: tracked.len(),
            threshold: graph_config.threshold,
            min_keyword_occurrences: config.min_keyword_occurrences,
            min_keyword_length: config.min_keyword_length,
        },
        documents: documents
            .iter()
            .map(|d| roster_entry(d, config.summary_excerpt_chars))
            .collect(),
        top_keywords: summaries,
        keyword_connections: keyword_connections(&tracked, &index),
    };
    write_json(out_dir, INDEX_FILE, &index_file)?;
    write_json(out_dir, TIMELINE_BY_YEAR_FILE, &timeline_by_year(documents))?;
    write_json(out_dir, RELATIONSHIPS_FILE, &graph.records)?;
    write_json(out_dir, STATS_FILE, &graph.stats)?;
    artifacts_written += 4;

    info!("Emission complete: {} artifacts", artifacts_written);
    Ok(EmitReport {
        artifacts_written,
        tracked_keywords: tracked.len(),
    })
}

/// Rewrite only the relationship-bearing artifacts.
pub fn write_relationships(out_dir: &Path, graph: &RelationGraph) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| EmitError::io(out_dir, e))?;
    write_json(out_dir, RELATIONSHIPS_FILE, &graph.records)?;
    write_json(out_dir, STATS_FILE, &graph.stats)?;
    info!("Rewrote relationship artifacts in {}", out_dir.display());
    Ok(())
}

/// One keyword's timeline: keyword-list matches plus content matches found
/// in summaries, chronologically sorted with undated entries last.
fn keyword_timeline(
    keyword: &str,
    documents: &[Document],
    index: &InvertedIndex,
) -> KeywordTimelineFile {
    let mut entries = Vec::new();

    for &pos in index.postings(keyword) {
        entries.push(timeline_entry(&documents[pos], MatchType::Keyword));
    }

    let mut content_match_count = 0;
    for doc in documents {
        if doc.keywords.contains(keyword) {
            continue;
        }
        if doc.summary.to_lowercase().contains(keyword) {
            entries.push(timeline_entry(doc, MatchType::Content));
            content_match_count += 1;
        }
    }

    entries.sort_by_key(|e| (e.timestamp.unwrap_or(NaiveDate::MAX), e.id.clone()));

    KeywordTimelineFile {
        keyword: keyword.to_string(),
        keyword_match_count: index.document_count(keyword),
        content_match_count,
        total_documents: entries.len(),
        timeline: entries,
    }
}

fn timeline_entry(doc: &Document, match_type: MatchType) -> TimelineEntry {
    TimelineEntry {
        id: doc.id.clone(),
        timestamp: doc.timestamp,
        keywords: doc.keywords.clone(),
        summary: doc.summary.clone(),
        match_type,
    }
}

fn roster_entry(doc: &Document, excerpt_chars: usize) -> DocumentEntry {
    DocumentEntry {
        id: doc.id.clone(),
        timestamp: doc.timestamp,
        keywords: doc.keywords.clone(),
        summary: excerpt(&doc.summary, excerpt_chars),
    }
}

/// Truncate to a character budget on a char boundary.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('\u{2026}');
    cut
}

/// Dated documents grouped by calendar year, chronological within each.
fn timeline_by_year(documents: &[Document]) -> BTreeMap<i32, Vec<DocumentEntry>> {
    let mut years: BTreeMap<i32, Vec<(NaiveDate, DocumentEntry)>> = BTreeMap::new();
    for doc in documents {
        if let Some(date) = doc.timestamp {
            years
                .entry(date.year())
                .or_default()
                .push((date, roster_entry(doc, usize::MAX)));
        }
    }
    years
        .into_iter()
        .map(|(year, mut entries)| {
            entries.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.cmp(&b.1.id)));
            (year, entries.into_iter().map(|(_, e)| e).collect())
        })
        .collect()
}

/// Shared-document counts between tracked keyword pairs; only pairs with at
/// least one shared document appear, keyed smaller keyword first.
fn keyword_connections(
    tracked: &[TrackedKeyword],
    index: &InvertedIndex,
) -> BTreeMap<String, BTreeMap<String, usize>> {
    let mut connections: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for (i, a) in tracked.iter().enumerate() {
        for b in tracked.iter().skip(i + 1) {
            let shared = shared_count(index.postings(&a.keyword), index.postings(&b.keyword));
            if shared > 0 {
                let (first, second) = if a.keyword <= b.keyword {
                    (&a.keyword, &b.keyword)
                } else {
                    (&b.keyword, &a.keyword)
                };
                connections
                    .entry(first.clone())
                    .or_default()
                    .insert(second.clone(), shared);
            }
        }
    }
    connections
}

/// Intersection size of two sorted posting lists.
fn shared_count(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

/// Serialize to a temp file in the target directory, then rename into
/// place. The final name only ever points at a complete artifact.
fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = dir.join(name);
    let bytes =
        serde_json::to_vec_pretty(value).map_err(|e| EmitError::json(path.clone(), e))?;

    let tmp = dir.join(format!(".{}.tmp", name));
    fs::write(&tmp, bytes).map_err(|e| EmitError::io(tmp.clone(), e))?;
    fs::rename(&tmp, &path).map_err(|e| EmitError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_respects_char_budget() {
        assert_eq!(excerpt("short", 280), "short");
        let long = "a".repeat(300);
        let cut = excerpt(&long, 280);
        assert_eq!(cut.chars().count(), 280);
        assert!(cut.ends_with('\u{2026}'));
    }

    #[test]
    fn test_shared_count() {
        assert_eq!(shared_count(&[1, 3, 5, 7], &[2, 3, 5, 9]), 2);
        assert_eq!(shared_count(&[], &[1, 2]), 0);
        assert_eq!(shared_count(&[4], &[4]), 1);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EmitConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_excerpt_budget_rejected() {
        let config = EmitConfig {
            summary_excerpt_chars: 0,
            ..EmitConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
