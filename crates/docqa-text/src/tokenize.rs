use std::collections::HashSet;

use docqa_core::types::{Corpus, Token, Tokens};

use crate::stopwords::english_stopwords;

/// Normalizes text into index-eligible words.
///
/// Text is lowercased, then every character other than `a..=z` and the
/// ASCII space is deleted outright. Deleting (rather than blanking)
/// punctuation fuses its neighbours: `"e-mail"` becomes `"email"` and a
/// newline between two words joins them. The remaining text is split on
/// whitespace and stopwords are dropped. Order and repeats are kept.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::english() }
}

impl Tokenizer {
    /// Stopwords are matched case-insensitively.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { stopwords: stopwords.into_iter().map(|s| s.as_ref().to_lowercase()).collect() }
    }

    pub fn english() -> Self { Self { stopwords: english_stopwords() } }

    pub fn is_stopword(&self, word: &str) -> bool { self.stopwords.contains(word) }

    pub fn tokenize(&self, text: &str) -> Tokens {
        let kept: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == ' ')
            .collect();
        kept.split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(Token::from)
            .collect()
    }

    pub fn tokenize_corpus(&self, documents: &Corpus<String>) -> Corpus {
        documents.map_values(|text| self.tokenize(text))
    }
}
