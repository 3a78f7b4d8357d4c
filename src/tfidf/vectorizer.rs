//! TF-IDF vectorizer for text feature extraction.
//!
//! Weights are raw term counts times a smoothed IDF,
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, and every transformed vector is
//! scaled to unit L2 length. Vocabulary indices follow first appearance in
//! the fitted corpus.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use requery::analysis::analyzer::EnglishAnalyzer;
//! use requery::tfidf::TfIdfVectorizer;
//!
//! let mut vectorizer = TfIdfVectorizer::new(Arc::new(EnglishAnalyzer::new().unwrap()));
//! vectorizer
//!     .fit(&["Friends is an American sitcom", "Watch Friends on Netflix"])
//!     .unwrap();
//!
//! assert_eq!(vectorizer.terms(), &["friends", "american", "sitcom", "watch", "netflix"]);
//! let query = vectorizer.transform("friends").unwrap();
//! assert_eq!(query.nnz(), 1);
//! ```

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::tfidf::TermVector;

/// TF-IDF vectorizer fitted on a small in-memory corpus.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Terms by index.
    terms: Vec<String>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Number of documents seen by the last fit.
    n_documents: usize,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on a corpus, replacing any previous vocabulary.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let mut vocabulary = AHashMap::new();
        let mut terms = Vec::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen = AHashSet::new();
            for term in self.analyzer.terms(document.as_ref())? {
                let index = match vocabulary.get(&term) {
                    Some(&index) => index,
                    None => {
                        let index = terms.len();
                        vocabulary.insert(term.clone(), index);
                        terms.push(term);
                        document_frequency.push(0);
                        index
                    }
                };
                if seen.insert(index) {
                    document_frequency[index] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        self.idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = vocabulary;
        self.terms = terms;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Transform a text into an L2-normalized TF-IDF vector.
    ///
    /// Terms outside the fitted vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Result<TermVector> {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for term in self.analyzer.terms(text)? {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: TermVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        vector.normalize_l2();

        Ok(vector)
    }

    /// Fit on `documents` and return their vectors, in order.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<TermVector>> {
        self.fit(documents)?;
        documents
            .iter()
            .map(|document| self.transform(document.as_ref()))
            .collect()
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Term at a vocabulary index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Vocabulary index of a term.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a vocabulary index.
    pub fn idf(&self, index: usize) -> Option<f64> {
        self.idf.get(index).copied()
    }

    /// Number of documents in the last fitted corpus.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::EnglishAnalyzer;

    fn vectorizer() -> TfIdfVectorizer {
        TfIdfVectorizer::new(Arc::new(EnglishAnalyzer::new().unwrap()))
    }

    #[test]
    fn test_vocabulary_in_first_appearance_order() {
        let mut vectorizer = vectorizer();
        vectorizer
            .fit(&["Watch Friends online", "Friends cast and crew"])
            .unwrap();

        assert_eq!(vectorizer.terms(), &["watch", "friends", "online", "cast", "crew"]);
        assert_eq!(vectorizer.index_of("cast"), Some(3));
        assert_eq!(vectorizer.term(1), Some("friends"));
        assert_eq!(vectorizer.index_of("and"), None);
        assert_eq!(vectorizer.n_documents(), 2);
    }

    #[test]
    fn test_smoothed_idf() {
        let mut vectorizer = vectorizer();
        vectorizer.fit(&["friends sitcom", "friends netflix"]).unwrap();

        let shared = vectorizer.idf(vectorizer.index_of("friends").unwrap()).unwrap();
        let rare = vectorizer.idf(vectorizer.index_of("sitcom").unwrap()).unwrap();

        assert!((shared - 1.0).abs() < 1e-12);
        assert!((rare - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let mut vectorizer = vectorizer();
        let vectors = vectorizer
            .fit_transform(&["friends sitcom sitcom", "friends netflix"])
            .unwrap();

        for vector in &vectors {
            assert!((vector.l2_norm() - 1.0).abs() < 1e-12);
        }
        let sitcom = vectorizer.index_of("sitcom").unwrap();
        let friends = vectorizer.index_of("friends").unwrap();
        assert!(vectors[0].get(sitcom) > vectors[0].get(friends));
    }

    #[test]
    fn test_unknown_terms_are_ignored() {
        let mut vectorizer = vectorizer();
        vectorizer.fit(&["friends sitcom"]).unwrap();

        assert!(vectorizer.transform("seinfeld").unwrap().is_empty());
    }

    #[test]
    fn test_refit_replaces_vocabulary() {
        let mut vectorizer = vectorizer();
        vectorizer.fit(&["friends sitcom"]).unwrap();
        vectorizer.fit(&["netflix"]).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 1);
        assert_eq!(vectorizer.index_of("friends"), None);
    }
}
