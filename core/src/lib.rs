//! TF-IDF document search over a small in-memory corpus.
//!
//! Documents are split on spaces, stop words are dropped, and each term is
//! recorded in an inverted index. Queries are split into plus words, which
//! add `idf * tf` to a document's relevance, and `-minus` words, which drop
//! any document containing them. The top [`MAX_RESULT_DOCUMENT_COUNT`]
//! documents are returned.

pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod tokenizer;

pub use index::{DocId, InvertedIndex, Postings};
pub use query::{Query, MINUS_WORD_MARKER};
pub use ranker::{RankedResult, MAX_RESULT_DOCUMENT_COUNT};
pub use server::SearchServer;
pub use tokenizer::{split_into_words, StopWords};
