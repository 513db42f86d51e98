use std::collections::HashSet;

use proptest::prelude::*;

use docqa_core::types::{Corpus, Query, Tokens};
use docqa_text::stopwords::ENGLISH_STOPWORDS;
use docqa_text::{compute_idfs, top_files, top_sentences, Tokenizer};

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["cat", "dog", "fish", "bird", "tree", "rock", "river", "cloud"]).prop_map(String::from)
}

fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(prop::collection::vec(word(), 1..8), 0..8).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, tokens)| (format!("doc{i}"), tokens))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = Query> {
    prop::collection::vec(word(), 0..4).prop_map(|words| words.into_iter().collect())
}

proptest! {
    #[test]
    fn tokenize_is_deterministic(text in "\\PC{0,80}") {
        let tokenizer = Tokenizer::english();
        prop_assert_eq!(tokenizer.tokenize(&text), tokenizer.tokenize(&text));
    }

    #[test]
    fn tokens_are_lowercase_letters_and_never_stopwords(text in "\\PC{0,80}") {
        let tokenizer = Tokenizer::english();
        let stopwords: HashSet<&str> = ENGLISH_STOPWORDS.iter().copied().collect();
        for token in tokenizer.tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {:?}", token);
            prop_assert!(!stopwords.contains(token.as_str()));
        }
    }

    #[test]
    fn idf_values_lie_between_zero_and_ln_n(docs in corpus_strategy()) {
        let idfs = compute_idfs(&docs);
        let max = (docs.len() as f64).ln();
        for (word, idf) in idfs.iter() {
            prop_assert!(idf >= 0.0 && idf <= max + 1e-12, "{} -> {}", word, idf);
            let everywhere = docs.values().all(|tokens: &Tokens| tokens.iter().any(|t| t == word));
            prop_assert_eq!(idf == 0.0, everywhere);
        }
    }

    #[test]
    fn idf_keys_are_exactly_the_observed_tokens(docs in corpus_strategy()) {
        let idfs = compute_idfs(&docs);
        let observed: HashSet<&str> = docs.values().flatten().map(String::as_str).collect();
        let keys: HashSet<&str> = idfs.words().collect();
        prop_assert_eq!(keys, observed);
    }

    #[test]
    fn rankings_never_exceed_n(docs in corpus_strategy(), query in query_strategy(), n in 0usize..10) {
        let idfs = compute_idfs(&docs);
        let files = top_files(&query, &docs, &idfs, n);
        prop_assert_eq!(files.len(), n.min(docs.len()));
        let sentences = top_sentences(&query, &docs, &idfs, n);
        prop_assert_eq!(sentences.len(), n.min(docs.len()));
    }

    #[test]
    fn ranked_files_are_a_permutation_prefix(docs in corpus_strategy(), query in query_strategy()) {
        let idfs = compute_idfs(&docs);
        let files = top_files(&query, &docs, &idfs, docs.len());
        let mut sorted = files.clone();
        sorted.sort();
        let mut expected: Vec<String> = docs.ids().map(String::from).collect();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }
}
