//! Core QueryExpansion implementation.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};

use crate::document::{Document, RelevanceFeedback};
use crate::error::Result;

use super::augmenter::QueryAugmenter;
use super::builder::QueryExpansionBuilder;
use super::config::AugmentationConfig;
use super::odds::LogOddsRanker;
use super::r#trait::{TermRanker, check_inputs};
use super::rocchio::RocchioRanker;
use super::types::{Augmentation, RankedTerm, Strategy};

/// Query augmentation engine.
///
/// Holds one ranker per strategy and the augmenter that turns a ranking into
/// a new query. The configured strategy is used by [`augment`](Self::augment);
/// [`augment_with`](Self::augment_with) picks one per call.
pub struct QueryExpansion {
    pub(super) config: AugmentationConfig,
    pub(super) rocchio: RocchioRanker,
    pub(super) log_odds: LogOddsRanker,
    pub(super) augmenter: QueryAugmenter,
}

impl QueryExpansion {
    /// Create an engine from parts.
    ///
    /// This constructor is typically not called directly. Use `QueryExpansionBuilder` instead.
    pub fn new(
        config: AugmentationConfig,
        rocchio: RocchioRanker,
        log_odds: LogOddsRanker,
        augmenter: QueryAugmenter,
    ) -> Self {
        Self {
            config,
            rocchio,
            log_odds,
            augmenter,
        }
    }

    /// Create an engine with the given configuration and stop words.
    pub fn with_config(config: AugmentationConfig, stop_words: Arc<HashSet<String>>) -> Result<Self> {
        QueryExpansionBuilder::new()
            .config(config)
            .stop_words(stop_words)
            .build()
    }

    /// Create a new builder for query expansion.
    ///
    /// # Example
    /// ```
    /// use requery::expansion::{QueryExpansion, Strategy};
    ///
    /// let engine = QueryExpansion::builder()
    ///     .strategy(Strategy::LogOdds)
    ///     .max_new_terms(3)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(engine.config().max_new_terms, 3);
    /// ```
    pub fn builder() -> QueryExpansionBuilder {
        QueryExpansionBuilder::new()
    }

    pub fn config(&self) -> &AugmentationConfig {
        &self.config
    }

    /// Ranker for a strategy.
    pub fn ranker(&self, strategy: Strategy) -> &dyn TermRanker {
        match strategy {
            Strategy::Rocchio => &self.rocchio,
            Strategy::LogOdds => &self.log_odds,
        }
    }

    /// Rank candidate terms with a strategy.
    pub fn rank(
        &self,
        strategy: Strategy,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<Vec<RankedTerm>> {
        check_inputs(query, documents, feedback)?;
        self.ranker(strategy).rank(query, documents, feedback)
    }

    /// Augment a query with the configured strategy.
    pub fn augment(
        &self,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<Augmentation> {
        self.augment_with(self.config.strategy, query, documents, feedback)
    }

    /// Augment a query with the given strategy.
    ///
    /// # Arguments
    /// * `strategy` - The ranking strategy to use
    /// * `query` - The current query string
    /// * `documents` - The current result set, in rank order
    /// * `feedback` - Relevance partition over `documents`
    ///
    /// # Returns
    /// The augmented query. When no document is relevant the query is
    /// returned unchanged with `progressed == false`.
    pub fn augment_with(
        &self,
        strategy: Strategy,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<Augmentation> {
        check_inputs(query, documents, feedback)?;

        if feedback.relevant_count() == 0 {
            info!("No relevant documents, leaving query '{query}' unchanged");
            return Ok(Augmentation::unchanged(query));
        }

        let ranker = self.ranker(strategy);
        let ranked = ranker.rank(query, documents, feedback)?;
        debug!("{} produced {} candidate terms", ranker.name(), ranked.len());

        let augmentation = self.augmenter.augment(query, &ranked);
        if augmentation.progressed {
            info!(
                "Augmenting by {} ({}): '{}'",
                augmentation.added_terms.join(" "),
                strategy,
                augmentation.query
            );
        } else {
            info!("{strategy} found no new terms for query '{query}'");
        }

        Ok(augmentation)
    }
}

impl std::fmt::Debug for QueryExpansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExpansion")
            .field("config", &self.config)
            .field("stop_words", &self.augmenter.stop_words().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Relevance;
    use crate::error::RequeryError;

    fn documents() -> Vec<Document> {
        vec![
            Document::new(1, "a", "Friends on Netflix", "Stream every season"),
            Document::new(2, "b", "Friends sitcom", "Created by David Crane and Marta Kauffman"),
            Document::new(3, "c", "Friends cast", "David Crane and Marta Kauffman produced it"),
        ]
    }

    fn feedback() -> RelevanceFeedback {
        RelevanceFeedback::from_labels(&[
            Relevance::NotRelevant,
            Relevance::Relevant,
            Relevance::Relevant,
        ])
    }

    #[test]
    fn test_empty_document_set_fails_fast() {
        let engine = QueryExpansion::builder().build().unwrap();
        let result = engine.augment("friends", &[], &RelevanceFeedback::default());

        assert!(matches!(result, Err(RequeryError::EmptyDocumentSet(q)) if q == "friends"));
    }

    #[test]
    fn test_mismatched_feedback_is_rejected() {
        let engine = QueryExpansion::builder().build().unwrap();
        let feedback = RelevanceFeedback::from_labels(&[Relevance::Relevant]);

        assert!(matches!(
            engine.augment("friends", &documents(), &feedback),
            Err(RequeryError::Feedback(_))
        ));
    }

    #[test]
    fn test_no_relevant_documents_leaves_query_unchanged() {
        let engine = QueryExpansion::builder().build().unwrap();
        let feedback = RelevanceFeedback::from_labels(&[Relevance::NotRelevant; 3]);

        for strategy in [Strategy::Rocchio, Strategy::LogOdds] {
            let augmentation = engine
                .augment_with(strategy, "friends", &documents(), &feedback)
                .unwrap();
            assert_eq!(augmentation, Augmentation::unchanged("friends"));
        }
    }

    #[test]
    fn test_both_strategies_add_relevant_terms() {
        let engine = QueryExpansion::builder().build().unwrap();
        let relevant_vocabulary = [
            "created", "david", "crane", "marta", "kauffman", "sitcom", "cast", "produced",
        ];

        for strategy in [Strategy::Rocchio, Strategy::LogOdds] {
            let augmentation = engine
                .augment_with(strategy, "friends", &documents(), &feedback())
                .unwrap();

            assert!(augmentation.progressed);
            assert!(augmentation.query.starts_with("friends "));
            assert_eq!(augmentation.added_terms.len(), 2);
            for term in &augmentation.added_terms {
                assert!(relevant_vocabulary.contains(&term.as_str()), "{strategy}: {term}");
            }
        }
    }

    #[test]
    fn test_configured_strategy_is_used() {
        let engine = QueryExpansion::builder()
            .strategy(Strategy::LogOdds)
            .build()
            .unwrap();

        let configured = engine.augment("friends", &documents(), &feedback()).unwrap();
        let explicit = engine
            .augment_with(Strategy::LogOdds, "friends", &documents(), &feedback())
            .unwrap();
        assert_eq!(configured, explicit);
        assert_eq!(engine.ranker(Strategy::LogOdds).name(), "log-odds");
    }
}
