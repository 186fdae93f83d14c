//! Artifact schema - the external JSON contract
//!
//! These shapes are consumed by the visualizer and must stay
//! bit-compatible. No wall-clock field appears anywhere: two runs over
//! identical input produce byte-identical artifacts.

use chronicle_domain::{DocId, KeywordSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `index.json` - the global entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexFile {
    /// Run-level metadata and config echo
    pub metadata: IndexMetadata,

    /// Every ingested document with minimal fields, in corpus order
    pub documents: Vec<DocumentEntry>,

    /// Tracked keywords with their data file names, strongest first
    pub top_keywords: Vec<KeywordSummary>,

    /// Shared-document counts between tracked keyword pairs; outer key is
    /// the lexicographically smaller keyword
    pub keyword_connections: BTreeMap<String, BTreeMap<String, usize>>,
}

/// Metadata block of `index.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Documents serialized into the roster
    pub total_documents: usize,

    /// Records skipped at ingestion
    pub skipped_documents: usize,

    /// Documents with a resolved timestamp
    pub documents_with_timestamps: usize,

    /// Distinct keywords across the corpus before filtering
    pub total_keywords: usize,

    /// Keywords that passed the tracking filters
    pub keywords_tracked: usize,

    /// Similarity threshold used for the relationship graph
    pub threshold: f64,

    /// Keyword inclusion floor (document count)
    pub min_keyword_occurrences: usize,

    /// Minimum keyword length in characters
    pub min_keyword_length: usize,
}

/// One document in the `index.json` roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Document id
    pub id: DocId,

    /// Resolved date, if any
    pub timestamp: Option<NaiveDate>,

    /// Normalized keywords
    pub keywords: KeywordSet,

    /// Summary excerpt (bounded length)
    pub summary: String,
}

/// One tracked keyword in the `index.json` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSummary {
    /// The keyword
    pub keyword: String,

    /// Documents listing the keyword
    pub count: usize,

    /// Documents matched via summary content only
    pub content_match_count: usize,

    /// Total documents in the keyword's timeline
    pub total_documents: usize,

    /// Timeline file name, e.g. `keyword_001_flight_logs.json`
    pub data_file: String,
}

/// `keyword_NNN_<slug>.json` - one tracked keyword's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTimelineFile {
    /// The keyword
    pub keyword: String,

    /// Documents listing the keyword
    pub keyword_match_count: usize,

    /// Documents matched via summary content only
    pub content_match_count: usize,

    /// Total timeline entries
    pub total_documents: usize,

    /// Matching documents, chronological, undated entries last
    pub timeline: Vec<TimelineEntry>,
}

/// One document inside a keyword timeline or year grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Document id
    pub id: DocId,

    /// Resolved date, if any
    pub timestamp: Option<NaiveDate>,

    /// Normalized keywords
    pub keywords: KeywordSet,

    /// Cleaned summary
    pub summary: String,

    /// How the document matched the keyword
    pub match_type: MatchType,
}

/// How a document entered a keyword timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// The keyword appears in the document's keyword list
    Keyword,

    /// The keyword appears only in the document's summary text
    Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_serde() {
        assert_eq!(
            serde_json::to_string(&MatchType::Keyword).unwrap(),
            "\"keyword\""
        );
        assert_eq!(
            serde_json::to_string(&MatchType::Content).unwrap(),
            "\"content\""
        );
    }

    #[test]
    fn test_timeline_entry_round_trip() {
        let entry = TimelineEntry {
            id: DocId::new("EFTA1"),
            timestamp: NaiveDate::from_ymd_opt(2015, 6, 1),
            keywords: KeywordSet::from_raw(["email"]),
            summary: "An email.".to_string(),
            match_type: MatchType::Keyword,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2015-06-01\""));
        let back: TimelineEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_null_timestamp_serializes_as_null() {
        let entry = TimelineEntry {
            id: DocId::new("EFTA1"),
            timestamp: None,
            keywords: KeywordSet::new(),
            summary: String::new(),
            match_type: MatchType::Content,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"timestamp\":null"));
    }
}
