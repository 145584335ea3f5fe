use std::collections::BTreeSet;

/// Split text into tokens on the space character only. Runs of spaces never
/// produce empty tokens; tabs and punctuation are kept inside tokens.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> + Clone {
    text.split(' ').filter(|w| !w.is_empty())
}

/// Set of words dropped from documents and queries before indexing or parsing.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    pub fn from_text(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.extend_from_text(text);
        stop_words
    }

    /// Add every token of `text` to the set.
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(split_into_words(text).map(str::to_string));
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Keep only the tokens that are not stop words.
    pub fn filter<'a, I>(&'a self, tokens: I) -> impl Iterator<Item = &'a str> + Clone + 'a
    where
        I: Iterator<Item = &'a str> + Clone + 'a,
    {
        tokens.filter(move |w| !self.contains(w))
    }

    /// Tokenize `text` and drop stop words.
    pub fn split_no_stop<'a>(&'a self, text: &'a str) -> Vec<&'a str> {
        self.filter(split_into_words(text)).collect()
    }
}
