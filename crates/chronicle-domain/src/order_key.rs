//! Order-key module - the total-order proxy for earlier/later decisions

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Total-order proxy for a document's place in the corpus timeline
///
/// A document with a resolved date orders by that date; undated documents
/// fall back to the persisted corpus insertion index. Two keys compare by
/// date (then index, then nothing further - callers break remaining ties by
/// id) when both carry dates, and by index alone when either side is
/// undated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderKey {
    date: Option<NaiveDate>,
    index: usize,
}

impl OrderKey {
    /// Create an order key from an optional date and the insertion index
    pub fn new(date: Option<NaiveDate>, index: usize) -> Self {
        Self { date, index }
    }

    /// The resolved date, if any
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The corpus insertion index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two keys under the fallback rule: dates when both sides have
    /// one, insertion indices otherwise. Equal results are possible only
    /// for a key compared with itself, since insertion indices are unique
    /// per corpus.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b).then(self.index.cmp(&other.index)),
            _ => self.index.cmp(&other.index),
        }
    }

    /// Temporal distance between two keys, used to break similarity ties in
    /// favor of the closer partner. Days when both sides are dated,
    /// insertion-index distance otherwise. The two units never mix within
    /// a single comparison because the owner's key is fixed.
    pub fn distance(&self, other: &Self) -> u64 {
        match (self.date, other.date) {
            (Some(a), Some(b)) => (a - b).num_days().unsigned_abs(),
            _ => self.index.abs_diff(other.index) as u64,
        }
    }
}
