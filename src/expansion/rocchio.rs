//! Rocchio relevance feedback over a per-iteration TF-IDF space.
//!
//! The modified query vector is
//!
//! ```text
//! q_m = alpha * q0 + beta * mean(relevant) - gamma * mean(not_relevant)
//! ```
//!
//! where every vector comes from one TF-IDF fit over the joint text of the
//! current result set. A centroid of an empty group is left out of the sum.
//! Negative weights are kept.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::document::{Document, RelevanceFeedback};
use crate::error::Result;
use crate::expansion::config::{DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_GAMMA};
use crate::tfidf::{TermVector, TfIdfVectorizer};

use super::r#trait::{TermRanker, check_inputs};
use super::types::RankedTerm;

/// Ranks terms by their weight in the Rocchio-modified query vector.
pub struct RocchioRanker {
    alpha: f64,
    beta: f64,
    gamma: f64,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for RocchioRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RocchioRanker")
            .field("alpha", &self.alpha)
            .field("beta", &self.beta)
            .field("gamma", &self.gamma)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl RocchioRanker {
    /// Create a ranker with the given weights and the English vectorizer analyzer.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        Ok(Self::with_analyzer(
            alpha,
            beta,
            gamma,
            Arc::new(EnglishAnalyzer::new()?),
        ))
    }

    /// Create a ranker that tokenizes with a custom analyzer.
    pub fn with_analyzer(alpha: f64, beta: f64, gamma: f64, analyzer: Arc<dyn Analyzer>) -> Self {
        RocchioRanker {
            alpha,
            beta,
            gamma,
            analyzer,
        }
    }

    /// Fit a vectorizer on the result set and compute the modified query vector.
    ///
    /// The fitted vectorizer is returned alongside so callers can map vector
    /// indices back to terms. Fails on an empty result set or an invalid
    /// partition.
    pub fn modified_query(
        &self,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<(TfIdfVectorizer, TermVector)> {
        check_inputs(query, documents, feedback)?;
        let corpus: Vec<String> = documents.iter().map(Document::joint_text).collect();

        let mut vectorizer = TfIdfVectorizer::new(self.analyzer.clone());
        let vectors = vectorizer.fit_transform(&corpus)?;

        let mut modified = vectorizer.transform(query)?.scaled(self.alpha);

        let relevant = TermVector::sum(feedback.relevant().iter().filter_map(|&i| vectors.get(i)));
        if feedback.relevant_count() > 0 {
            modified.add_scaled(&relevant, self.beta / feedback.relevant_count() as f64);
        } else {
            debug!("No relevant documents, skipping the relevant centroid");
        }

        let not_relevant =
            TermVector::sum(feedback.not_relevant().iter().filter_map(|&i| vectors.get(i)));
        if feedback.not_relevant_count() > 0 {
            modified.add_scaled(
                &not_relevant,
                -self.gamma / feedback.not_relevant_count() as f64,
            );
        } else {
            debug!("No non-relevant documents, skipping the non-relevant centroid");
        }

        Ok((vectorizer, modified))
    }
}

impl Default for RocchioRanker {
    fn default() -> Self {
        Self::with_analyzer(
            DEFAULT_ALPHA,
            DEFAULT_BETA,
            DEFAULT_GAMMA,
            Arc::new(EnglishAnalyzer::default()),
        )
    }
}

impl TermRanker for RocchioRanker {
    fn rank(
        &self,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<Vec<RankedTerm>> {
        let (vectorizer, modified) = self.modified_query(query, documents, feedback)?;

        // Index order is first appearance, so a stable sort keeps it for ties.
        let mut entries = modified.entries();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        let ranked: Vec<RankedTerm> = entries
            .into_iter()
            .filter_map(|(index, weight)| {
                vectorizer
                    .term(index)
                    .map(|term| RankedTerm::new(term, weight))
            })
            .collect();

        debug!(
            "Rocchio ranked {} terms over a vocabulary of {}",
            ranked.len(),
            vectorizer.vocabulary_size()
        );

        Ok(ranked)
    }

    fn name(&self) -> &str {
        "rocchio"
    }
}
