//! Keyword set module - normalized tokens with exact set arithmetic

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A document's set of normalized keyword tokens
///
/// Tokens are lowercase, trimmed, and deduplicated. Backed by a `BTreeSet`
/// so iteration (and therefore serialization) order is deterministic.
///
/// Set cardinalities are exact integers; only the final Jaccard division
/// touches floating point, which keeps `jaccard(a, b)` bit-equal to
/// `jaccard(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    /// Create an empty keyword set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw tokens, normalizing as it goes: trim,
    /// lowercase, drop empties, deduplicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_domain::KeywordSet;
    ///
    /// let set = KeywordSet::from_raw(["  FBI ", "email", "fbi", ""]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("fbi"));
    /// ```
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = raw
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self(tokens)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the set contains a token (expects normalized input)
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Iterate tokens in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Exact size of the intersection with another set
    pub fn intersection_count(&self, other: &Self) -> usize {
        // Walk the smaller set, probe the larger
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().filter(|t| large.0.contains(*t)).count()
    }

    /// Jaccard similarity: |A ∩ B| / |A ∪ B|, defined as 0.0 when the
    /// union is empty.
    pub fn jaccard(&self, other: &Self) -> f64 {
        let intersection = self.intersection_count(other);
        let union = self.len() + other.len() - intersection;
        if union == 0 {
            return 0.0;
        }
        intersection as f64 / union as f64
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_raw(iter.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_dedups_and_lowercases() {
        let set = KeywordSet::from_raw(["Email", " email ", "FBI", "", "  "]);
        assert_eq!(set.len(), 2);
        let tokens: Vec<&str> = set.iter().collect();
        assert_eq!(tokens, vec!["email", "fbi"]);
    }

    #[test]
    fn test_spec_example_three_sevenths() {
        // A = {epstein, email, florida, victim, fbi}
        // B = {epstein, email, attorney, victim, court}
        // intersection 3, union 7
        let a = KeywordSet::from_raw(["epstein", "email", "florida", "victim", "fbi"]);
        let b = KeywordSet::from_raw(["epstein", "email", "attorney", "victim", "court"]);
        assert_eq!(a.intersection_count(&b), 3);
        assert_eq!(a.jaccard(&b), 3.0 / 7.0);
    }

    #[test]
    fn test_identical_sets_are_exactly_one() {
        let a = KeywordSet::from_raw(["flight", "logs"]);
        let b = KeywordSet::from_raw(["logs", "flight"]);
        assert_eq!(a.jaccard(&b), 1.0);
    }

    #[test]
    fn test_empty_union_is_zero() {
        let a = KeywordSet::new();
        let b = KeywordSet::new();
        assert_eq!(a.jaccard(&b), 0.0);
    }

    #[test]
    fn test_disjoint_sets_are_zero() {
        let a = KeywordSet::from_raw(["alpha"]);
        let b = KeywordSet::from_raw(["beta"]);
        assert_eq!(a.jaccard(&b), 0.0);
    }

    #[test]
    fn test_serde_is_sorted_array() {
        let set = KeywordSet::from_raw(["zulu", "alpha", "mike"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["alpha","mike","zulu"]"#);
        let back: KeywordSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
