use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use docqa_core::traits::SentenceSegmenter;

use crate::stopwords::english_abbreviations;

/// Sentence boundaries per Unicode Standard Annex #29, minus the breaks
/// that follow a known abbreviation or a single-letter initial.
///
/// UAX #29 alone splits `"Mr. Smith left."` after `"Mr."`; here that
/// piece is joined with the next one. Pieces are trimmed and blank
/// pieces dropped, so `"Hi.  Bye."` gives `["Hi.", "Bye."]`.
#[derive(Debug, Clone)]
pub struct UnicodeSentenceSegmenter {
    abbreviations: HashSet<String>,
}

impl Default for UnicodeSentenceSegmenter {
    fn default() -> Self { Self::english() }
}

impl UnicodeSentenceSegmenter {
    /// Abbreviations are given without their final period and matched
    /// case-insensitively.
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { abbreviations: abbreviations.into_iter().map(|s| s.as_ref().to_lowercase()).collect() }
    }

    pub fn english() -> Self { Self { abbreviations: english_abbreviations() } }

    fn ends_with_abbreviation(&self, piece: &str) -> bool {
        let Some(last) = piece.split_whitespace().next_back() else { return false };
        let Some(word) = last.strip_suffix('.') else { return false };
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_uppercase();
        }
        self.abbreviations.contains(&word.to_lowercase())
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn sentences<'a>(&self, passage: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = None;
        for (offset, piece) in passage.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(offset);
            if self.ends_with_abbreviation(piece.trim_end()) {
                continue;
            }
            sentences.push(passage[begin..offset + piece.len()].trim());
            start = None;
        }
        if let Some(begin) = start {
            sentences.push(passage[begin..].trim());
        }
        sentences.retain(|s| !s.is_empty());
        sentences
    }
}
