//! Relationship record module - bounded previous/next related documents

use crate::document::DocId;
use crate::tier::RelevanceTier;
use serde::{Deserialize, Serialize};

/// Maximum entries in each of a document's `previous` and `next` lists
pub const MAX_RELATED: usize = 3;

/// One related document as surfaced to the visualizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedDoc {
    /// Related document id
    pub id: DocId,

    /// Jaccard similarity to the owning document
    pub similarity: f64,

    /// Relevance tier derived from the similarity
    pub tier: RelevanceTier,
}

/// A document's bounded, directional relationship lists
///
/// `previous` holds up to [`MAX_RELATED`] earlier documents, `next` up to
/// [`MAX_RELATED`] later ones, each sorted by similarity descending.
/// Selection is independent per document, so a reverse link may be absent
/// after truncation; that asymmetry is intended behavior.
///
/// An empty record is a valid terminal state for documents with no
/// qualifying edges, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Earlier related documents, strongest first
    pub previous: Vec<RelatedDoc>,

    /// Later related documents, strongest first
    pub next: Vec<RelatedDoc>,
}

impl RelationshipRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entries across both directions
    pub fn len(&self) -> usize {
        self.previous.len() + self.next.len()
    }

    /// Whether the record has no entries in either direction
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.next.is_empty()
    }

    /// Iterate all entries, previous first
    pub fn entries(&self) -> impl Iterator<Item = &RelatedDoc> {
        self.previous.iter().chain(self.next.iter())
    }
}
