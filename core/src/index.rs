use crate::query::Query;
use serde::Serialize;
use std::collections::BTreeMap;

pub type DocId = u32;

/// Postings for one term: document id to recorded term frequency.
pub type Postings = BTreeMap<DocId, f64>;

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    word_to_document_freqs: BTreeMap<String, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record every term of one document. Terms that are plus words of
    /// `scoring_query` get `occurrences / terms.len()`; all others get 0.
    /// Re-adding an id overwrites its entries for the terms it shares.
    pub fn add_document(&mut self, doc_id: DocId, terms: &[&str], scoring_query: &Query) {
        let total = terms.len() as f64;
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for &term in terms {
            *counts.entry(term).or_insert(0) += 1;
        }

        let mut scored_terms = 0usize;
        for (term, count) in counts {
            let tf = if scoring_query.is_plus_word(term) {
                scored_terms += 1;
                count as f64 / total
            } else {
                0.0
            };
            self.word_to_document_freqs
                .entry(term.to_string())
                .or_default()
                .insert(doc_id, tf);
        }
        tracing::debug!(doc_id, num_terms = terms.len(), scored_terms, "indexed document");
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.word_to_document_freqs.get(term)
    }

    /// Number of documents recorded under `term`, including zero-frequency ones.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings(term).map_or(0, BTreeMap::len)
    }

    pub fn term_frequency(&self, term: &str, doc_id: DocId) -> Option<f64> {
        self.postings(term)?.get(&doc_id).copied()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.word_to_document_freqs.keys().map(String::as_str)
    }

    pub fn num_terms(&self) -> usize { self.word_to_document_freqs.len() }

    pub fn is_empty(&self) -> bool { self.word_to_document_freqs.is_empty() }
}
