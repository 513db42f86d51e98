use std::collections::{HashMap, HashSet};

use docqa_core::types::{Corpus, IdfTable};

/// Inverse document frequency of every word in `documents`.
///
/// `idf(w) = ln(N / n_w)` where `N` is the number of documents and `n_w`
/// the number of documents containing `w` at least once. A word present
/// in every document gets 0. An empty corpus yields an empty table.
pub fn compute_idfs(documents: &Corpus) -> IdfTable {
    if documents.is_empty() {
        return IdfTable::new();
    }
    let mut containing: HashMap<&str, usize> = HashMap::new();
    for tokens in documents.values() {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for word in distinct {
            *containing.entry(word).or_insert(0) += 1;
        }
    }
    let total = documents.len() as f64;
    containing
        .into_iter()
        .map(|(word, count)| (word.to_string(), (total / count as f64).ln()))
        .collect()
}
