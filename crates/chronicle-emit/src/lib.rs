//! Chronicle artifact serialization
//!
//! Flattens the relationship graph and corpus into the static JSON
//! artifacts the browser visualizer consumes:
//!
//! - `index.json` - corpus roster, tracked-keyword table, keyword
//!   co-occurrence counts
//! - `keyword_NNN_<slug>.json` - chronological per-keyword timelines
//! - `timeline_by_year.json` - dated documents grouped by year
//! - `relationships.json` - per-document previous/next fragments
//! - `relationship_stats.json` - exact aggregate metrics
//!
//! Writes are atomic per artifact (temp file then rename); an I/O failure
//! aborts the run without leaving a partial file under its final name.
//! The `verify` module re-parses emitted artifacts and cross-checks them
//! against the corpus.

pub mod artifact;
pub mod error;
pub mod keywords;
pub mod verify;
pub mod writer;

pub use artifact::{
    DocumentEntry, IndexFile, IndexMetadata, KeywordSummary, KeywordTimelineFile, MatchType,
    TimelineEntry,
};
pub use error::{EmitError, Result};
pub use keywords::{sanitize_filename, select_tracked_keywords, TrackedKeyword};
pub use verify::{verify_artifacts, VerifyReport};
pub use writer::{write_full, write_relationships, EmitConfig, EmitReport};
