//! Document module - the unit of the corpus

use crate::keywords::KeywordSet;
use crate::order_key::OrderKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable string identifier for a document, e.g. an accession code
/// such as `EFTA004521`.
///
/// Ids order lexicographically, which is the final tie-break everywhere
/// a deterministic ordering is required.
///
/// # Examples
///
/// ```
/// use chronicle_domain::DocId;
///
/// let a = DocId::new("EFTA000001");
/// let b = DocId::new("EFTA000002");
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a DocId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An ingested document
///
/// Documents are immutable inputs to the graph core; nothing downstream of
/// ingestion mutates them. `order_key` is the corpus insertion index,
/// persisted explicitly so that re-runs on reshuffled input stay
/// deterministic rather than depending on iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique stable identifier
    pub id: DocId,

    /// Normalized keyword tokens; may be empty
    pub keywords: KeywordSet,

    /// Resolved calendar date, absent when extraction failed or the date
    /// fell outside the valid range
    pub timestamp: Option<NaiveDate>,

    /// Cleaned summary text (may be empty)
    pub summary: String,

    /// Corpus insertion index (0-based)
    pub order_key: usize,
}

impl Document {
    /// The document's total-order proxy for earlier/later decisions
    pub fn order_key(&self) -> OrderKey {
        OrderKey::new(self.timestamp, self.order_key)
    }

    /// Whether the document carries a resolved date
    pub fn is_dated(&self) -> bool {
        self.timestamp.is_some()
    }
}
