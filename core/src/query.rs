use crate::tokenizer::{split_into_words, StopWords};
use std::collections::BTreeSet;

/// Leading character that turns a query term into an exclusion.
pub const MINUS_WORD_MARKER: char = '-';

/// A parsed query. Both sets are ordered, so scoring walks terms in ascending
/// order. A term present in both sets is left as is; exclusion wins at ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Tokenize `text`, drop stop words and sort each term into plus or minus
    /// words. A bare `-` becomes an empty minus word, which matches nothing.
    pub fn parse(text: &str, stop_words: &StopWords) -> Self {
        let mut query = Query::default();
        for word in stop_words.filter(split_into_words(text)) {
            match word.strip_prefix(MINUS_WORD_MARKER) {
                Some(rest) => { query.minus_words.insert(rest.to_string()); }
                None => { query.plus_words.insert(word.to_string()); }
            }
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }

    pub fn is_plus_word(&self, word: &str) -> bool { self.plus_words.contains(word) }
}
