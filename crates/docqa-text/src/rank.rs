//! TF-IDF ranking of documents and sentences against a query.
//!
//! Both rankers score an entry by summing the IDF of every distinct query
//! word the entry contains (presence only, repeats do not add weight).
//! Sorting is stable, so entries with equal keys keep corpus order.

use std::cmp::Ordering;
use std::collections::HashSet;

use docqa_core::types::{Corpus, IdfTable, Query, RankedHit, Tokens};

/// Query terms in a fixed order so that sums are bit-for-bit reproducible.
fn ordered_terms(query: &Query) -> Vec<&str> {
    let mut terms: Vec<&str> = query.iter().collect();
    terms.sort_unstable();
    terms
}

fn matched_idf(terms: &[&str], tokens: &Tokens, idfs: &IdfTable) -> f64 {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    terms.iter().filter(|t| present.contains(*t)).map(|t| idfs.weight(t)).sum()
}

/// Share of a sentence's tokens that are query terms.
fn query_term_density(query: &Query, tokens: &Tokens) -> f64 {
    let hits = tokens.iter().filter(|t| query.contains(t)).count();
    hits as f64 / tokens.len() as f64
}

/// Documents ordered by summed query-term IDF, at most `n` of them.
pub fn rank_files(query: &Query, files: &Corpus, idfs: &IdfTable, n: usize) -> Vec<RankedHit> {
    let terms = ordered_terms(query);
    let mut hits: Vec<RankedHit> = files
        .iter()
        .map(|(id, tokens)| RankedHit { id: id.to_string(), score: matched_idf(&terms, tokens, idfs), density: None })
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(n);
    hits
}

pub fn top_files(query: &Query, files: &Corpus, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_files(query, files, idfs, n).into_iter().map(|hit| hit.id).collect()
}

/// Sentences ordered by summed query-term IDF, then by query term density.
///
/// Every sentence must have at least one token; callers filter empty
/// sentences out before ranking.
pub fn rank_sentences(query: &Query, sentences: &Corpus, idfs: &IdfTable, n: usize) -> Vec<RankedHit> {
    let terms = ordered_terms(query);
    let mut hits: Vec<RankedHit> = sentences
        .iter()
        .map(|(text, tokens)| {
            debug_assert!(!tokens.is_empty(), "sentence without tokens: {text:?}");
            RankedHit {
                id: text.to_string(),
                score: matched_idf(&terms, tokens, idfs),
                density: Some(query_term_density(query, tokens)),
            }
        })
        .collect();
    hits.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => b.density.unwrap_or(0.0).total_cmp(&a.density.unwrap_or(0.0)),
        other => other,
    });
    hits.truncate(n);
    hits
}

pub fn top_sentences(query: &Query, sentences: &Corpus, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_sentences(query, sentences, idfs, n).into_iter().map(|hit| hit.id).collect()
}
