//! Corpus loading - raw records to validated documents

use crate::config::IngestConfig;
use crate::dates::{extract_first_date, parse_iso_date};
use crate::error::{IngestError, Result};
use crate::record::RawRecord;
use crate::summary::clean_summary;
use chronicle_domain::{DocId, Document, KeywordSet};
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// A loaded corpus: validated documents in input order plus skip diagnostics
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Documents in corpus insertion order; `order_key` is the position here
    pub documents: Vec<Document>,

    /// Records skipped for malformed id or keyword list
    pub skipped: usize,
}

/// Load a corpus from a JSON array file, or from a directory of `.json`
/// files (read in sorted name order, each holding a record or an array).
///
/// Per-record failures are logged and counted, never fatal. Insertion order
/// is assigned in encounter order and persisted on each document.
pub fn load_corpus(path: &Path, config: &IngestConfig) -> Result<Corpus> {
    config
        .validate()
        .map_err(IngestError::Config)?;

    info!("Loading corpus from {}", path.display());

    let mut values = Vec::new();
    if path.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(path)
            .map_err(|source| IngestError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        entries.sort();
        for file in entries {
            collect_values(&file, &mut values)?;
        }
    } else {
        collect_values(path, &mut values)?;
    }

    let mut documents = Vec::new();
    let mut skipped = 0;

    for value in values {
        match build_document(value, documents.len(), config) {
            Ok(doc) => documents.push(doc),
            Err(reason) => {
                warn!("Skipping record {}: {}", documents.len() + skipped, reason);
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} documents ({} skipped, {} dated)",
        documents.len(),
        skipped,
        documents.iter().filter(|d| d.is_dated()).count()
    );

    Ok(Corpus { documents, skipped })
}

fn collect_values(path: &Path, out: &mut Vec<Value>) -> Result<()> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let json: Value = serde_json::from_str(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match json {
        Value::Array(items) => out.extend(items),
        Value::Object(_) => out.push(json),
        _ => return Err(IngestError::NotAnArray(path.to_path_buf())),
    }
    Ok(())
}

/// Convert one raw value into a document; `Err` carries the skip reason.
fn build_document(
    value: Value,
    order_key: usize,
    config: &IngestConfig,
) -> std::result::Result<Document, String> {
    let record: RawRecord =
        serde_json::from_value(value).map_err(|e| format!("malformed record: {}", e))?;

    if record.id.trim().is_empty() {
        return Err("empty id".to_string());
    }

    let keywords = KeywordSet::from_raw(&record.keywords);
    let summary = clean_summary(&record.summary);
    let timestamp = resolve_timestamp(&record, &summary, config);

    if timestamp.is_none() {
        debug!("No valid timestamp for {}", record.id);
    }

    Ok(Document {
        id: DocId::new(record.id.trim()),
        keywords,
        timestamp,
        summary,
        order_key,
    })
}

/// Resolve a document date: explicit field first, then summary extraction.
/// Out-of-window dates are discarded at each step, matching the rule that
/// an invalid timestamp is absent, not an error.
fn resolve_timestamp(
    record: &RawRecord,
    summary: &str,
    config: &IngestConfig,
) -> Option<NaiveDate> {
    if let Some(explicit) = record.timestamp.as_deref() {
        if let Some(date) = parse_iso_date(explicit) {
            if config.date_in_range(date) {
                return Some(date);
            }
        }
    }

    extract_first_date(summary).filter(|d| config.date_in_range(*d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_corpus(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_basic_corpus() {
        let file = write_corpus(
            r#"[
                {"id": "EFTA2", "keywords": ["Email", "email", "FBI"], "timestamp": "2015-06-01", "summary": "An email."},
                {"id": "EFTA1", "keywords": [], "summary": ""}
            ]"#,
        );
        let corpus = load_corpus(file.path(), &IngestConfig::default()).unwrap();

        assert_eq!(corpus.documents.len(), 2);
        assert_eq!(corpus.skipped, 0);
        // Order keys follow input order, not id order
        assert_eq!(corpus.documents[0].id.as_str(), "EFTA2");
        assert_eq!(corpus.documents[0].order_key, 0);
        assert_eq!(corpus.documents[1].order_key, 1);
        // Keywords normalized and deduplicated
        assert_eq!(corpus.documents[0].keywords.len(), 2);
    }

    #[test]
    fn test_malformed_records_are_skipped_not_fatal() {
        let file = write_corpus(
            r#"[
                {"keywords": ["missing", "id"]},
                {"id": "   "},
                {"id": "EFTA1", "keywords": "not-a-list"},
                {"id": "EFTA2", "keywords": ["ok"]}
            ]"#,
        );
        let corpus = load_corpus(file.path(), &IngestConfig::default()).unwrap();

        assert_eq!(corpus.documents.len(), 1);
        assert_eq!(corpus.skipped, 3);
        assert_eq!(corpus.documents[0].id.as_str(), "EFTA2");
        assert_eq!(corpus.documents[0].order_key, 0);
    }

    #[test]
    fn test_out_of_range_explicit_timestamp_falls_back_to_summary() {
        let file = write_corpus(
            r#"[{"id": "EFTA1", "timestamp": "1987-01-01",
                 "summary": "Executed on March 9, 2018 in New York."}]"#,
        );
        let corpus = load_corpus(file.path(), &IngestConfig::default()).unwrap();
        assert_eq!(
            corpus.documents[0].timestamp,
            NaiveDate::from_ymd_opt(2018, 3, 9)
        );
    }

    #[test]
    fn test_undated_document_still_loads() {
        let file = write_corpus(r#"[{"id": "EFTA1", "summary": "no dates here"}]"#);
        let corpus = load_corpus(file.path(), &IngestConfig::default()).unwrap();
        assert_eq!(corpus.documents.len(), 1);
        assert!(corpus.documents[0].timestamp.is_none());
    }

    #[test]
    fn test_summary_boilerplate_removed_before_extraction() {
        let file = write_corpus(
            r#"[{"id": "EFTA1",
                 "summary": "Here's a summary of the file. Wire sent 04/02/2016."}]"#,
        );
        let corpus = load_corpus(file.path(), &IngestConfig::default()).unwrap();
        assert_eq!(corpus.documents[0].summary, "Wire sent 04/02/2016.");
        assert_eq!(
            corpus.documents[0].timestamp,
            NaiveDate::from_ymd_opt(2016, 4, 2)
        );
    }

    #[test]
    fn test_non_array_corpus_is_error() {
        let file = write_corpus(r#""just a string""#);
        let result = load_corpus(file.path(), &IngestConfig::default());
        assert!(matches!(result, Err(IngestError::NotAnArray(_))));
    }

    #[test]
    fn test_directory_corpus_reads_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{"id": "EFTA2", "keywords": ["two"]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"[{"id": "EFTA1", "keywords": ["one"]}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let corpus = load_corpus(dir.path(), &IngestConfig::default()).unwrap();
        assert_eq!(corpus.documents.len(), 2);
        assert_eq!(corpus.documents[0].id.as_str(), "EFTA1");
        assert_eq!(corpus.documents[1].id.as_str(), "EFTA2");
    }
}
