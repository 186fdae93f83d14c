//! Relationship selector - bounded previous/next lists per document

use crate::error::{GraphError, Result};
use chronicle_domain::{
    DocId, Document, Edge, OrderKey, RelatedDoc, RelationshipRecord, RelevanceTier,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Produce the bounded previous/next relationship record for every document.
///
/// For each document the qualifying edges are partitioned by order key:
/// partners ordered strictly before the owner go to `previous`, everything
/// else (including the impossible-in-practice equal case) to `next`. Each
/// partition sorts by similarity descending, then temporal proximity
/// ascending, then partner id ascending, and truncates to `max_related`.
///
/// Selection is independent per document; a reverse link can be lost to
/// truncation on one side while surviving on the other. That asymmetry is
/// intended.
///
/// Entries below the somewhat-relevant floor carry no tier and are never
/// listed, regardless of how low the edge threshold was set.
pub fn select_relationships(
    documents: &[Document],
    edges: &[Edge],
    max_related: usize,
) -> Result<BTreeMap<DocId, RelationshipRecord>> {
    let mut positions: HashMap<&DocId, usize> = HashMap::with_capacity(documents.len());
    for (pos, doc) in documents.iter().enumerate() {
        if positions.insert(&doc.id, pos).is_some() {
            return Err(GraphError::DuplicateId(doc.id.to_string()));
        }
    }

    // Adjacency: document position → (partner position, similarity)
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); documents.len()];
    for edge in edges {
        let a = positions[&edge.a];
        let b = positions[&edge.b];
        adjacency[a].push((b, edge.similarity));
        adjacency[b].push((a, edge.similarity));
    }

    let mut records = BTreeMap::new();
    for (pos, doc) in documents.iter().enumerate() {
        let record = select_for(doc, &adjacency[pos], documents, max_related);
        records.insert(doc.id.clone(), record);
    }

    Ok(records)
}

fn select_for(
    owner: &Document,
    partners: &[(usize, f64)],
    documents: &[Document],
    max_related: usize,
) -> RelationshipRecord {
    let owner_key = owner.order_key();
    let mut previous: Vec<Candidate> = Vec::new();
    let mut next: Vec<Candidate> = Vec::new();

    for &(pos, similarity) in partners {
        let Some(tier) = RelevanceTier::from_similarity(similarity) else {
            continue;
        };
        let partner = &documents[pos];
        let partner_key = partner.order_key();
        let candidate = Candidate {
            id: partner.id.clone(),
            similarity,
            tier,
            distance: owner_key.distance(&partner_key),
        };
        match partner_key.compare(&owner_key) {
            Ordering::Less => previous.push(candidate),
            Ordering::Equal | Ordering::Greater => next.push(candidate),
        }
    }

    RelationshipRecord {
        previous: rank(previous, max_related),
        next: rank(next, max_related),
    }
}

struct Candidate {
    id: DocId,
    similarity: f64,
    tier: RelevanceTier,
    distance: u64,
}

/// Similarity descending, temporal proximity ascending, id ascending.
fn rank(mut candidates: Vec<Candidate>, max_related: usize) -> Vec<RelatedDoc> {
    candidates.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.distance.cmp(&b.distance))
            .then(a.id.cmp(&b.id))
    });
    candidates.truncate(max_related);
    candidates
        .into_iter()
        .map(|c| RelatedDoc {
            id: c.id,
            similarity: c.similarity,
            tier: c.tier,
        })
        .collect()
}
