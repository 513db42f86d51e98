use std::path::Path;

use tracing::debug;

use docqa_core::config::RetrievalOptions;
use docqa_core::corpus::DirectoryLoader;
use docqa_core::error::Result;
use docqa_core::traits::{CorpusLoader, SentenceSegmenter};
use docqa_core::types::{Corpus, Query};

use crate::idf::compute_idfs;
use crate::rank::{rank_files, rank_sentences};
use crate::segment::UnicodeSentenceSegmenter;
use crate::tokenize::Tokenizer;

/// Two-stage TF-IDF retrieval: best documents first, then the best
/// sentences inside them.
pub struct Retriever<L = DirectoryLoader, S = UnicodeSentenceSegmenter>
where
    L: CorpusLoader,
    S: SentenceSegmenter,
{
    loader: L,
    segmenter: S,
    tokenizer: Tokenizer,
    options: RetrievalOptions,
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(DirectoryLoader::new(), UnicodeSentenceSegmenter::english(), Tokenizer::english(), RetrievalOptions::default())
    }
}

impl<L, S> Retriever<L, S>
where
    L: CorpusLoader,
    S: SentenceSegmenter,
{
    pub fn new(loader: L, segmenter: S, tokenizer: Tokenizer, options: RetrievalOptions) -> Self {
        Self { loader, segmenter, tokenizer, options }
    }

    pub fn query(&self, text: &str) -> Query { self.tokenizer.tokenize(text).into_iter().collect() }

    pub fn load(&self, corpus_dir: &Path) -> Result<Corpus<String>> { self.loader.load(corpus_dir) }

    /// Load the corpus under `corpus_dir` and answer `query` from it.
    pub fn answer(&self, corpus_dir: &Path, query: &str) -> Result<Vec<String>> {
        let documents = self.load(corpus_dir)?;
        Ok(self.answer_documents(&documents, query))
    }

    /// Answer `query` from already-loaded raw documents.
    pub fn answer_documents(&self, documents: &Corpus<String>, query: &str) -> Vec<String> {
        let files = self.tokenizer.tokenize_corpus(documents);
        let file_idfs = compute_idfs(&files);
        let query = self.query(query);

        let top = rank_files(&query, &files, &file_idfs, self.options.file_matches);
        for hit in &top {
            debug!(file = %hit.id, score = hit.score, "document match");
        }

        let sentences = self.sentence_corpus(documents, top.iter().map(|hit| hit.id.as_str()));
        let sentence_idfs = compute_idfs(&sentences);
        let matches = rank_sentences(&query, &sentences, &sentence_idfs, self.options.sentence_matches);
        debug!(candidates = sentences.len(), returned = matches.len(), "ranked sentences");
        for hit in &matches {
            debug!(sentence = %hit.id, score = hit.score, density = hit.density, "sentence match");
        }
        matches.into_iter().map(|hit| hit.id).collect()
    }

    /// Tokenized sentences of the named documents, keyed by sentence text.
    ///
    /// Identical sentence text from different places collapses into one
    /// entry. Sentences with no tokens are dropped.
    pub fn sentence_corpus<'a>(&self, documents: &Corpus<String>, names: impl IntoIterator<Item = &'a str>) -> Corpus {
        let mut sentences = Corpus::new();
        for name in names {
            let Some(text) = documents.get(name) else { continue };
            for passage in text.split('\n') {
                for sentence in self.segmenter.sentences(passage) {
                    let tokens = self.tokenizer.tokenize(sentence);
                    if !tokens.is_empty() {
                        sentences.insert(sentence, tokens);
                    }
                }
            }
        }
        sentences
    }
}
