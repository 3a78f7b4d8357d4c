//! Appends the best surviving candidate terms to a query.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::analysis::token_filter::stop::SMART_STOP_WORDS_SET;
use crate::expansion::config::DEFAULT_MAX_NEW_TERMS;

use super::types::{Augmentation, RankedTerm};

/// Filters ranked candidates and appends up to `max_new_terms` of them.
///
/// A candidate is skipped when it occurs as a substring of the input query
/// (case-sensitive), when it is a stop word, or when it was already appended.
/// Expansion is additive: the output always starts with the input query.
///
/// # Examples
///
/// ```
/// use requery::expansion::QueryAugmenter;
///
/// let augmenter = QueryAugmenter::default();
/// let augmentation = augmenter.augment_terms("friends", ["friends", "the", "david", "crane", "marta"]);
///
/// assert_eq!(augmentation.query, "friends david crane");
/// assert!(augmentation.progressed);
/// ```
#[derive(Debug, Clone)]
pub struct QueryAugmenter {
    stop_words: Arc<HashSet<String>>,
    max_new_terms: usize,
}

impl QueryAugmenter {
    pub fn new(stop_words: Arc<HashSet<String>>, max_new_terms: usize) -> Self {
        QueryAugmenter {
            stop_words,
            max_new_terms,
        }
    }

    pub fn max_new_terms(&self) -> usize {
        self.max_new_terms
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Augment `query` with ranked candidates, best first.
    pub fn augment(&self, query: &str, ranked: &[RankedTerm]) -> Augmentation {
        self.augment_terms(query, ranked.iter().map(|t| t.term.as_str()))
    }

    /// Augment `query` with plain candidate terms, best first.
    pub fn augment_terms<'a, I>(&self, query: &str, candidates: I) -> Augmentation
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added: Vec<String> = Vec::new();

        for term in candidates {
            if added.len() >= self.max_new_terms {
                break;
            }
            if term.is_empty()
                || query.contains(term)
                || self.stop_words.contains(term)
                || added.iter().any(|a| a == term)
            {
                continue;
            }
            added.push(term.to_string());
        }

        if added.is_empty() {
            debug!("No candidate survived filtering for query '{query}'");
            return Augmentation::unchanged(query);
        }

        let mut augmented = String::from(query);
        for term in &added {
            augmented.push(' ');
            augmented.push_str(term);
        }

        Augmentation {
            query: augmented,
            added_terms: added,
            progressed: true,
        }
    }
}

impl Default for QueryAugmenter {
    fn default() -> Self {
        QueryAugmenter::new(Arc::new(SMART_STOP_WORDS_SET.clone()), DEFAULT_MAX_NEW_TERMS)
    }
}
