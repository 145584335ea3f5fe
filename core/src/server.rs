use crate::index::{DocId, InvertedIndex};
use crate::query::Query;
use crate::ranker::{self, RankedResult};
use crate::tokenizer::StopWords;

/// In-memory search engine: stop words, the inverted index and the document
/// count used as the IDF numerator.
#[derive(Debug, Default, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    document_count: u32,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text);
    }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Not checked against the number of documents actually added.
    pub fn set_document_count(&mut self, n: u32) {
        self.document_count = n;
    }

    pub fn document_count(&self) -> u32 { self.document_count }

    pub fn parse_query(&self, text: &str) -> Query {
        Query::parse(text, &self.stop_words)
    }

    /// Index `text` under `doc_id`. Only plus words of `scoring_query` get a
    /// non-zero term frequency, so documents must be re-added if the
    /// scoring query changes.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, scoring_query: &Query) {
        let terms = self.stop_words.split_no_stop(text);
        self.index.add_document(doc_id, &terms, scoring_query);
    }

    pub fn find_all_documents(&self, query: &Query) -> Vec<RankedResult> {
        ranker::find_all_documents(&self.index, query, self.document_count)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<RankedResult> {
        let query = self.parse_query(raw_query);
        ranker::find_top_documents(&self.index, &query, self.document_count)
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}
