//! Inverted keyword index
//!
//! Maps each keyword to the documents containing it, by corpus position.
//! This is what keeps pairwise comparison tractable at 10k+ documents:
//! only pairs sharing at least one posting list are ever scored.

use chronicle_domain::Document;
use std::collections::BTreeMap;

/// Keyword → sorted document positions
///
/// Built once and read-only afterwards. Positions index into the document
/// slice the index was built from; posting lists are in increasing order
/// because documents are scanned in corpus order.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Vec<usize>>,
}

impl InvertedIndex {
    /// Build the index over a document slice
    pub fn build(documents: &[Document]) -> Self {
        let mut postings: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (pos, doc) in documents.iter().enumerate() {
            for keyword in doc.keywords.iter() {
                postings.entry(keyword.to_string()).or_default().push(pos);
            }
        }
        Self { postings }
    }

    /// Documents containing a keyword, in corpus order
    pub fn postings(&self, keyword: &str) -> &[usize] {
        self.postings.get(keyword).map_or(&[], Vec::as_slice)
    }

    /// How many documents contain a keyword
    pub fn document_count(&self, keyword: &str) -> usize {
        self.postings(keyword).len()
    }

    /// Iterate keywords with their posting lists, in sorted keyword order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.postings
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_domain::{DocId, KeywordSet};

    fn doc(id: &str, order_key: usize, keywords: &[&str]) -> Document {
        Document {
            id: DocId::new(id),
            keywords: KeywordSet::from_raw(keywords),
            timestamp: None,
            summary: String::new(),
            order_key,
        }
    }

    #[test]
    fn test_build_and_lookup() {
        let docs = vec![
            doc("A", 0, &["email", "fbi"]),
            doc("B", 1, &["email"]),
            doc("C", 2, &["court"]),
        ];
        let index = InvertedIndex::build(&docs);

        assert_eq!(index.len(), 3);
        assert_eq!(index.postings("email"), &[0, 1]);
        assert_eq!(index.postings("fbi"), &[0]);
        assert_eq!(index.postings("court"), &[2]);
        assert_eq!(index.postings("absent"), &[] as &[usize]);
        assert_eq!(index.document_count("email"), 2);
    }

    #[test]
    fn test_empty_keyword_set_contributes_nothing() {
        let docs = vec![doc("A", 0, &[]), doc("B", 1, &["x"])];
        let index = InvertedIndex::build(&docs);
        assert_eq!(index.len(), 1);
        assert_eq!(index.postings("x"), &[1]);
    }

    #[test]
    fn test_postings_are_in_corpus_order() {
        let docs = vec![
            doc("Z", 0, &["k"]),
            doc("A", 1, &["k"]),
            doc("M", 2, &["k"]),
        ];
        let index = InvertedIndex::build(&docs);
        assert_eq!(index.postings("k"), &[0, 1, 2]);
    }
}
