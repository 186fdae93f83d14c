//! Raw corpus record - the input collaborator contract

use serde::Deserialize;

/// One raw record as produced by the upstream keyword/timestamp extraction
///
/// `{ id, keywords, timestamp (ISO-8601 or null), summary }`. Parsing a
/// record can fail independently of its neighbors; the loader skips and
/// counts such records.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Stable document identifier; must be non-empty
    pub id: String,

    /// Raw keyword tokens (normalized downstream)
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Explicit ISO-8601 timestamp, if the upstream extractor resolved one
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Raw summary text
    #[serde(default)]
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let json = r#"
        {
            "id": "EFTA004521",
            "keywords": ["Epstein", "email"],
            "timestamp": "2015-06-01",
            "summary": "An email chain."
        }
        "#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "EFTA004521");
        assert_eq!(record.keywords.len(), 2);
        assert_eq!(record.timestamp.as_deref(), Some("2015-06-01"));
    }

    #[test]
    fn test_minimal_record_uses_defaults() {
        let record: RawRecord = serde_json::from_str(r#"{"id": "EFTA1"}"#).unwrap();
        assert!(record.keywords.is_empty());
        assert!(record.timestamp.is_none());
        assert!(record.summary.is_empty());
    }

    #[test]
    fn test_null_timestamp() {
        let record: RawRecord =
            serde_json::from_str(r#"{"id": "EFTA1", "timestamp": null}"#).unwrap();
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_missing_id_fails() {
        let result: Result<RawRecord, _> = serde_json::from_str(r#"{"keywords": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_keywords_fail() {
        let result: Result<RawRecord, _> =
            serde_json::from_str(r#"{"id": "EFTA1", "keywords": "not-a-list"}"#);
        assert!(result.is_err());
    }
}
