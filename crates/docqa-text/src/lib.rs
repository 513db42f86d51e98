//! docqa-text
//!
//! TF-IDF retrieval over a small plain-text corpus: tokenization, IDF
//! tables, document and sentence ranking, and the `Retriever` that chains
//! them into a question-answering lookup.

pub mod idf;
pub mod pipeline;
pub mod rank;
pub mod segment;
pub mod stopwords;
pub mod tokenize;

pub use idf::compute_idfs;
pub use pipeline::Retriever;
pub use rank::{rank_files, rank_sentences, top_files, top_sentences};
pub use segment::UnicodeSentenceSegmenter;
pub use tokenize::Tokenizer;
