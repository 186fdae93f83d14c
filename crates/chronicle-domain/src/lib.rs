//! Chronicle Domain Layer
//!
//! This crate contains the core domain model for Chronicle: the typed
//! representation of documents, keyword sets, relationship edges, and
//! relevance tiers that the graph and serialization layers operate on.
//!
//! ## Key Concepts
//!
//! - **Document**: an immutable ingested record - id, keyword set, optional
//!   resolved date, summary, and a persisted corpus insertion index
//! - **KeywordSet**: normalized, deduplicated keyword tokens with exact
//!   integer set arithmetic
//! - **OrderKey**: total-order proxy (real date or insertion index) used to
//!   decide "earlier/later" when dates are missing
//! - **Edge**: a qualifying pairwise similarity between two documents
//! - **RelevanceTier**: categorical bucket derived from a similarity ratio
//! - **RelationshipRecord**: bounded previous/next related documents
//!
//! ## Architecture
//!
//! This crate holds value types and their invariants only:
//! - No I/O, no logging
//! - Ingestion validation lives in `chronicle-ingest`
//! - Graph construction lives in `chronicle-graph`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod edge;
pub mod keywords;
pub mod order_key;
pub mod relationship;
pub mod tier;

// Re-exports for convenience
pub use document::{DocId, Document};
pub use edge::Edge;
pub use keywords::KeywordSet;
pub use order_key::OrderKey;
pub use relationship::{RelatedDoc, RelationshipRecord, MAX_RELATED};
pub use tier::RelevanceTier;
