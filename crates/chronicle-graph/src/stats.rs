//! Aggregate relationship statistics
//!
//! Statistics are computed over the final per-document records - exactly
//! what gets serialized, entry by entry - never from the theoretical edge
//! set. An edge kept on both endpoints counts twice; one dropped from a
//! side by truncation counts once.

use chronicle_domain::{DocId, RelationshipRecord, RelevanceTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exact aggregates over the serialized relationship records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Documents in the corpus (including those with empty records)
    pub total_documents: usize,

    /// Total serialized relationship entries across all records
    pub total_relationships: usize,

    /// Documents with at least one previous entry
    pub documents_with_previous: usize,

    /// Documents with at least one next entry
    pub documents_with_next: usize,

    /// Documents with at least one entry in either direction
    pub documents_with_any: usize,

    /// `documents_with_any` as a percentage of `total_documents`
    pub pct_documents_with_any: f64,

    /// Mean serialized entries per document
    pub mean_relationships_per_doc: f64,

    /// Serialized entry counts per relevance tier
    pub tier_counts: BTreeMap<RelevanceTier, usize>,

    /// Tier counts as percentages of `total_relationships`
    pub tier_percentages: BTreeMap<RelevanceTier, f64>,
}

impl GraphStats {
    /// Compute statistics from the final records
    pub fn compute(records: &BTreeMap<DocId, RelationshipRecord>) -> Self {
        let mut stats = GraphStats {
            total_documents: records.len(),
            ..GraphStats::default()
        };

        for record in records.values() {
            stats.record(record);
        }
        stats.finalize();
        stats
    }

    fn record(&mut self, record: &RelationshipRecord) {
        if !record.previous.is_empty() {
            self.documents_with_previous += 1;
        }
        if !record.next.is_empty() {
            self.documents_with_next += 1;
        }
        if !record.is_empty() {
            self.documents_with_any += 1;
        }
        self.total_relationships += record.len();
        for entry in record.entries() {
            *self.tier_counts.entry(entry.tier).or_insert(0) += 1;
        }
    }

    fn finalize(&mut self) {
        if self.total_documents > 0 {
            self.pct_documents_with_any =
                100.0 * self.documents_with_any as f64 / self.total_documents as f64;
            self.mean_relationships_per_doc =
                self.total_relationships as f64 / self.total_documents as f64;
        }
        if self.total_relationships > 0 {
            for (tier, count) in &self.tier_counts {
                self.tier_percentages.insert(
                    *tier,
                    100.0 * *count as f64 / self.total_relationships as f64,
                );
            }
        }
    }

    /// Generate a summary report of the statistics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Relationship Statistics".to_string(),
            "=======================".to_string(),
            format!("Documents: {}", self.total_documents),
            format!("Relationship entries: {}", self.total_relationships),
            format!(
                "Documents with ≥1 relationship: {} ({:.1}%)",
                self.documents_with_any, self.pct_documents_with_any
            ),
            format!("  with previous: {}", self.documents_with_previous),
            format!("  with next: {}", self.documents_with_next),
            format!(
                "Mean relationships/doc: {:.2}",
                self.mean_relationships_per_doc
            ),
        ];

        if !self.tier_counts.is_empty() {
            lines.push("Tier distribution:".to_string());
            for (tier, count) in &self.tier_counts {
                let pct = self.tier_percentages.get(tier).copied().unwrap_or(0.0);
                lines.push(format!("  {}: {} ({:.1}%)", tier.as_str(), count, pct));
            }
        }

        lines.join("\n")
    }
}
