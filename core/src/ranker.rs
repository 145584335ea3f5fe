use crate::index::{DocId, InvertedIndex};
use crate::query::Query;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(rename = "document_id")]
    pub id: DocId,
    pub relevance: f64,
}

/// `ln(N / df)`, or 0 when there are no documents or the term is unseen.
pub fn inverse_document_frequency(document_count: u32, document_freq: usize) -> f64 {
    if document_count == 0 || document_freq == 0 {
        return 0.0;
    }
    (document_count as f64 / document_freq as f64).ln()
}

/// Score every document matching a plus word, then drop any document that
/// contains a minus word. Results come back in ascending id order.
pub fn find_all_documents(index: &InvertedIndex, query: &Query, document_count: u32) -> Vec<RankedResult> {
    let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.plus_words {
        let Some(postings) = index.postings(word) else { continue };
        let idf = inverse_document_frequency(document_count, postings.len());
        for (&doc_id, &tf) in postings {
            *document_to_relevance.entry(doc_id).or_insert(0.0) += idf * tf;
        }
    }

    for word in &query.minus_words {
        if let Some(postings) = index.postings(word) {
            for doc_id in postings.keys() {
                document_to_relevance.remove(doc_id);
            }
        }
    }

    document_to_relevance
        .into_iter()
        .map(|(id, relevance)| RankedResult { id, relevance })
        .collect()
}

/// Relevance descending, ties broken by ascending id.
pub fn by_relevance(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.relevance.total_cmp(&a.relevance).then_with(|| a.id.cmp(&b.id))
}

pub fn find_top_documents(index: &InvertedIndex, query: &Query, document_count: u32) -> Vec<RankedResult> {
    let mut matched = find_all_documents(index, query, document_count);
    let total_hits = matched.len();
    matched.sort_by(by_relevance);
    matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
    tracing::debug!(
        plus_words = query.plus_words.len(),
        minus_words = query.minus_words.len(),
        total_hits,
        returned = matched.len(),
        "ranked documents"
    );
    matched
}
