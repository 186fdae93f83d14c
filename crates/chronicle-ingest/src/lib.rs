//! Chronicle corpus ingestion
//!
//! This crate is the validation boundary between raw corpus records and the
//! typed domain model. It parses JSON records, normalizes keywords, resolves
//! timestamps (explicit field first, then regex extraction from summary
//! text), cleans summaries, and assigns the persisted insertion order.
//!
//! Malformed records are skipped with a diagnostic and counted; a single bad
//! record never aborts the batch. Unparseable or out-of-range timestamps
//! become `None` and the document still participates downstream via its
//! insertion-index fallback ordering.

pub mod config;
pub mod dates;
pub mod error;
pub mod loader;
pub mod record;
pub mod summary;

pub use config::IngestConfig;
pub use error::{IngestError, Result};
pub use loader::{load_corpus, Corpus};
pub use record::RawRecord;
