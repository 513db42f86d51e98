//! Domain types shared by the tokenizer, the IDF calculator and the rankers.

use std::collections::{HashMap, HashSet};

/// A normalized word: lowercase `a..=z` only, never a stopword.
pub type Token = String;
pub type Tokens = Vec<Token>;

/// An ordered mapping from document identifier to a value.
///
/// Raw corpora hold `String` text, tokenized corpora hold `Tokens`.
/// Identifiers are unique. Iteration follows insertion order, and
/// re-inserting an identifier replaces its value without moving it, so a
/// corpus keyed by sentence text collapses duplicate sentences into the
/// position of their first occurrence holding the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus<V = Tokens> {
    entries: Vec<(String, V)>,
    positions: HashMap<String, usize>,
}

impl<V> Default for Corpus<V> {
    fn default() -> Self {
        Self { entries: Vec::new(), positions: HashMap::new() }
    }
}

impl<V> Corpus<V> {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace. Returns the previous value for `id`, if any.
    pub fn insert(&mut self, id: impl Into<String>, value: V) -> Option<V> {
        let id = id.into();
        if let Some(&pos) = self.positions.get(&id) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.positions.insert(id.clone(), self.entries.len());
        self.entries.push((id, value));
        None
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.positions.get(id).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(id, v)| (id.as_str(), v))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> { self.entries.iter().map(|(id, _)| id.as_str()) }

    pub fn values(&self) -> impl Iterator<Item = &V> { self.entries.iter().map(|(_, v)| v) }

    /// Build a new corpus with the same identifiers and order.
    pub fn map_values<W>(&self, mut f: impl FnMut(&V) -> W) -> Corpus<W> {
        Corpus {
            entries: self.entries.iter().map(|(id, v)| (id.clone(), f(v))).collect(),
            positions: self.positions.clone(),
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Corpus<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for (id, value) in iter {
            corpus.insert(id, value);
        }
        corpus
    }
}

/// Inverse document frequency per observed token.
///
/// Only tokens seen in at least one document are keyed; every value is
/// finite and non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    idfs: HashMap<Token, f64>,
}

impl IdfTable {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, word: &str) -> Option<f64> { self.idfs.get(word).copied() }

    /// The IDF of `word`, or 0 for words the corpus never saw.
    pub fn weight(&self, word: &str) -> f64 { self.get(word).unwrap_or(0.0) }

    pub fn len(&self) -> usize { self.idfs.len() }

    pub fn is_empty(&self) -> bool { self.idfs.is_empty() }

    pub fn words(&self) -> impl Iterator<Item = &str> { self.idfs.keys().map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> { self.idfs.iter().map(|(w, &v)| (w.as_str(), v)) }
}

impl FromIterator<(Token, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (Token, f64)>>(iter: I) -> Self {
        Self { idfs: iter.into_iter().collect() }
    }
}

/// The distinct tokens of a user query. Order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: HashSet<Token>,
}

impl Query {
    pub fn contains(&self, word: &str) -> bool { self.terms.contains(word) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.terms.iter().map(String::as_str) }
}

impl FromIterator<Token> for Query {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self { terms: iter.into_iter().collect() }
    }
}

/// A ranked document or sentence.
///
/// `score` is the summed IDF of the query terms the entry contains;
/// higher is better. `density` is only set by sentence ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHit {
    pub id: String,
    pub score: f64,
    pub density: Option<f64>,
}
