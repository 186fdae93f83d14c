//! Edge module - qualifying pairwise similarity between two documents

use crate::document::DocId;

/// A qualifying (above-threshold) similarity relationship between two
/// documents
///
/// Edges are unordered pairs stored in canonical form: the lexicographically
/// smaller id first. The similarity engine constructs each pair exactly
/// once, so equality on `(a, b)` identifies the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Lexicographically smaller document id
    pub a: DocId,

    /// Lexicographically larger document id
    pub b: DocId,

    /// Jaccard similarity in [0, 1]
    pub similarity: f64,
}

impl Edge {
    /// Create an edge, canonicalizing the pair order
    pub fn new(x: DocId, y: DocId, similarity: f64) -> Self {
        assert!(x != y, "Self-edges are not representable");
        assert!(
            (0.0..=1.0).contains(&similarity),
            "Similarity must be in [0, 1]"
        );

        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self { a, b, similarity }
    }

    /// Given one endpoint, return the other; `None` if the id is not an
    /// endpoint of this edge.
    pub fn partner_of(&self, id: &DocId) -> Option<&DocId> {
        if *id == self.a {
            Some(&self.b)
        } else if *id == self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_ordering() {
        let e = Edge::new(DocId::new("EFTA2"), DocId::new("EFTA1"), 0.5);
        assert_eq!(e.a.as_str(), "EFTA1");
        assert_eq!(e.b.as_str(), "EFTA2");
    }

    #[test]
    fn test_partner_of() {
        let e = Edge::new(DocId::new("A"), DocId::new("B"), 0.6);
        assert_eq!(e.partner_of(&DocId::new("A")), Some(&DocId::new("B")));
        assert_eq!(e.partner_of(&DocId::new("B")), Some(&DocId::new("A")));
        assert_eq!(e.partner_of(&DocId::new("C")), None);
    }

    #[test]
    #[should_panic(expected = "Self-edges")]
    fn test_self_edge_panics() {
        let _ = Edge::new(DocId::new("A"), DocId::new("A"), 0.5);
    }

    #[test]
    #[should_panic(expected = "Similarity")]
    fn test_out_of_range_similarity_panics() {
        let _ = Edge::new(DocId::new("A"), DocId::new("B"), 1.5);
    }
}
