use std::path::Path;

use crate::error::Result;
use crate::types::Corpus;

/// Produces the raw documents of a corpus, keyed by document name.
pub trait CorpusLoader: Send + Sync {
    fn load(&self, dir: &Path) -> Result<Corpus<String>>;
}

/// Splits a passage into sentences, in reading order.
pub trait SentenceSegmenter: Send + Sync {
    fn sentences<'a>(&self, passage: &'a str) -> Vec<&'a str>;
}
