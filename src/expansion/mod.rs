//! Relevance-feedback query augmentation.
//!
//! Two strategies rank candidate terms from a labeled result set:
//! - [`RocchioRanker`]: weights in the Rocchio-modified TF-IDF query vector
//! - [`LogOddsRanker`]: smoothed Robertson/Sparck-Jones log-odds per term
//!
//! [`QueryAugmenter`] then appends the best surviving candidates to the query.
//! [`QueryExpansion`] ties the pieces together and dispatches on [`Strategy`].
//!
//! # Example
//!
//! ```
//! use requery::document::{Document, Relevance, RelevanceFeedback};
//! use requery::expansion::{augment, AugmentationConfig, Strategy};
//!
//! let documents = vec![
//!     Document::new(1, "https://www.netflix.com/", "Friends - Netflix", ""),
//!     Document::new(2, "https://es.wikipedia.org/wiki/Friends", "Friends - Wikipedia",
//!         "Friends is an American sitcom created by David Crane and Marta Kauffman"),
//! ];
//! let feedback = RelevanceFeedback::from_labels(&[Relevance::NotRelevant, Relevance::Relevant]);
//!
//! let augmentation = augment(
//!     Strategy::LogOdds,
//!     "friends",
//!     &documents,
//!     &feedback,
//!     &AugmentationConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(augmentation.query.starts_with("friends "));
//! assert_eq!(augmentation.added_terms.len(), 2);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::document::{Document, RelevanceFeedback};
use crate::error::Result;

mod augmenter;
mod builder;
pub mod config;
mod core;
pub mod odds;
mod rocchio;
mod r#trait;
mod types;

pub use augmenter::QueryAugmenter;
pub use builder::QueryExpansionBuilder;
pub use config::AugmentationConfig;
pub use self::core::QueryExpansion;
pub use odds::{LogOddsRanker, TermOdds, TermOddsTable};
pub use r#trait::TermRanker;
pub use rocchio::RocchioRanker;
pub use types::{Augmentation, RankedTerm, Strategy};

/// Augment `query` with the given strategy, using the built-in stop words.
///
/// `config.strategy` is ignored in favour of `strategy`.
pub fn augment(
    strategy: Strategy,
    query: &str,
    documents: &[Document],
    feedback: &RelevanceFeedback,
    config: &AugmentationConfig,
) -> Result<Augmentation> {
    QueryExpansion::builder()
        .config(config.clone())
        .build()?
        .augment_with(strategy, query, documents, feedback)
}

/// Rank candidate terms with the default Rocchio weights.
pub fn augment_rocchio(
    query: &str,
    documents: &[Document],
    feedback: &RelevanceFeedback,
) -> Result<Vec<String>> {
    let ranked = RocchioRanker::new(
        config::DEFAULT_ALPHA,
        config::DEFAULT_BETA,
        config::DEFAULT_GAMMA,
    )?
    .rank(query, documents, feedback)?;
    Ok(ranked.into_iter().map(|t| t.term).collect())
}

/// Rank candidate terms by log-odds, leaving out `stop_words`.
pub fn augment_odds(
    query: &str,
    documents: &[Document],
    feedback: &RelevanceFeedback,
    stop_words: Arc<HashSet<String>>,
) -> Result<Vec<String>> {
    let ranked = LogOddsRanker::new(stop_words)?.rank(query, documents, feedback)?;
    Ok(ranked.into_iter().map(|t| t.term).collect())
}

/// Append up to `max_new_terms` surviving candidates to `query`.
pub fn augment_query<S: AsRef<str>>(
    query: &str,
    ranked_terms: &[S],
    stop_words: Arc<HashSet<String>>,
    max_new_terms: usize,
) -> String {
    QueryAugmenter::new(stop_words, max_new_terms)
        .augment_terms(query, ranked_terms.iter().map(AsRef::as_ref))
        .query
}
