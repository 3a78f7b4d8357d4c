//! Builder for creating QueryExpansion instances.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::token_filter::stop::SMART_STOP_WORDS_SET;
use crate::error::Result;

use super::augmenter::QueryAugmenter;
use super::config::AugmentationConfig;
use super::core::QueryExpansion;
use super::odds::LogOddsRanker;
use super::rocchio::RocchioRanker;
use super::types::Strategy;

/// Builder for creating `QueryExpansion` instances.
///
/// Starts from [`AugmentationConfig::default`] and the built-in stop word
/// list. The configuration is validated in [`build`](Self::build).
///
/// # Example
///
/// ```
/// use requery::expansion::{QueryExpansionBuilder, Strategy};
///
/// let engine = QueryExpansionBuilder::new()
///     .strategy(Strategy::Rocchio)
///     .alpha(1.0)
///     .beta(0.8)
///     .gamma(0.1)
///     .build()
///     .unwrap();
/// assert_eq!(engine.config().beta, 0.8);
/// ```
pub struct QueryExpansionBuilder {
    config: AugmentationConfig,
    stop_words: Option<Arc<HashSet<String>>>,
    analyzer: Option<Arc<dyn Analyzer>>,
}

impl QueryExpansionBuilder {
    pub fn new() -> Self {
        Self {
            config: AugmentationConfig::default(),
            stop_words: None,
            analyzer: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: AugmentationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Weight of the original query vector (default: 1.0).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Weight of the relevant centroid (default: 0.75).
    pub fn beta(mut self, beta: f64) -> Self {
        self.config.beta = beta;
        self
    }

    /// Weight of the not-relevant centroid (default: 0.15).
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Set the maximum number of terms appended per step (default: 2).
    pub fn max_new_terms(mut self, max: usize) -> Self {
        self.config.max_new_terms = max;
        self
    }

    /// Stop words that can never be appended.
    pub fn stop_words(mut self, stop_words: Arc<HashSet<String>>) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Analyzer used by the TF-IDF vectorizer of the Rocchio strategy.
    pub fn analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Build the `QueryExpansion` instance.
    pub fn build(self) -> Result<QueryExpansion> {
        self.config.validate()?;

        let stop_words = self
            .stop_words
            .unwrap_or_else(|| Arc::new(SMART_STOP_WORDS_SET.clone()));
        let analyzer: Arc<dyn Analyzer> = match self.analyzer {
            Some(analyzer) => analyzer,
            None => Arc::new(EnglishAnalyzer::new()?),
        };

        let rocchio = RocchioRanker::with_analyzer(
            self.config.alpha,
            self.config.beta,
            self.config.gamma,
            analyzer,
        );
        let log_odds = LogOddsRanker::new(stop_words.clone())?;
        let augmenter = QueryAugmenter::new(stop_words, self.config.max_new_terms);

        Ok(QueryExpansion::new(self.config, rocchio, log_odds, augmenter))
    }
}

impl Default for QueryExpansionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
