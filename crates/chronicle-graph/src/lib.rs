//! Chronicle relationship-graph core
//!
//! Given the loaded corpus, this crate computes the pairwise
//! Jaccard-similarity edge set, selects each document's bounded
//! previous/next related documents, and derives exact aggregate statistics.
//!
//! The pairwise stage avoids naive all-pairs comparison: an inverted
//! keyword index restricts candidates to pairs sharing at least one
//! keyword, and the candidate accumulation yields exact intersection
//! cardinalities as a side effect, so each unordered pair is evaluated
//! once with integer arithmetic. Only the final ratio touches floating
//! point.
//!
//! Everything here is a pure function of `(documents, config)`; statistics
//! are an explicit accumulator computed from the final records, never
//! process-wide state.

pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod selector;
pub mod similarity;
pub mod stats;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{build_graph, RelationGraph};
pub use index::InvertedIndex;
pub use selector::select_relationships;
pub use similarity::compute_edges;
pub use stats::GraphStats;
