//! Probabilistic term weighting with the Robertson/Sparck-Jones offer weight.
//!
//! Title and snippet of every document are scored as separate fields, so a
//! result set of `n` documents offers `N = 2n` fields and the relevant group
//! offers `S = 2|R|`. For each term, `s` counts the relevant fields that
//! contain it and `df_t` counts all fields that contain it. The score is the
//! 0.5-smoothed log-odds ratio
//!
//! ```text
//! c_t = ln( ((s + 0.5) / (S - s + 0.5)) / ((df_t - s + 0.5) / (N - df_t - S + s + 0.5)) )
//! ```
//!
//! Every denominator is at least 0.5, so the score is finite for any
//! partition, including an empty relevant group.

use std::collections::HashSet;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::token_filter::stop::SMART_STOP_WORDS_SET;
use crate::document::{Document, DocumentNormalizer, RelevanceFeedback};
use crate::error::Result;

use super::r#trait::{TermRanker, check_inputs};
use super::types::RankedTerm;

/// Field counts of one term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermOdds {
    /// Relevant fields containing the term.
    pub s: usize,
    /// Fields of any document containing the term.
    pub df_t: usize,
    /// Lowest rank among relevant documents containing the term, `None` when
    /// no relevant document contains it.
    pub best_rank: Option<usize>,
    /// Smoothed log-odds score.
    pub score: f64,
}

/// Smoothed log-odds score of a term.
///
/// `s` relevant fields out of `big_s` contain the term, `df_t` fields out of
/// `n` contain it overall.
pub fn offer_weight(s: usize, df_t: usize, big_s: usize, n: usize) -> f64 {
    let (s, df_t, big_s, n) = (s as f64, df_t as f64, big_s as f64, n as f64);
    let relevant_odds = (s + 0.5) / (big_s - s + 0.5);
    let other_odds = (df_t - s + 0.5) / (n - df_t - big_s + s + 0.5);
    (relevant_odds / other_odds).ln()
}

/// Per-term statistics for one result set and partition.
///
/// Terms are kept in first-appearance order over the normalized joint text of
/// the documents in rank order.
#[derive(Debug, Clone, Default)]
pub struct TermOddsTable {
    terms: Vec<String>,
    odds: AHashMap<String, TermOdds>,
    relevant_fields: usize,
    total_fields: usize,
}

impl TermOddsTable {
    /// Count term statistics for `documents` under `feedback`.
    ///
    /// Fails when `feedback` does not label every document exactly once.
    pub fn build(
        documents: &[Document],
        feedback: &RelevanceFeedback,
        normalizer: &DocumentNormalizer,
    ) -> Result<Self> {
        feedback.validate(documents.len())?;

        let relevant_fields = 2 * feedback.relevant_count();
        let total_fields = 2 * feedback.total();

        let mut table = TermOddsTable {
            terms: Vec::new(),
            odds: AHashMap::new(),
            relevant_fields,
            total_fields,
        };

        for document in documents {
            for term in normalizer.terms(&document.joint_text())? {
                if !table.odds.contains_key(&term) {
                    table.odds.insert(
                        term.clone(),
                        TermOdds {
                            s: 0,
                            df_t: 0,
                            best_rank: None,
                            score: 0.0,
                        },
                    );
                    table.terms.push(term);
                }
            }
        }

        // best_rank follows the same title and snippet fields that `s` counts.
        let mut count = |position: usize, relevant: bool| -> Result<()> {
            let document = &documents[position];
            let rank = document.rank();
            for field in [document.title(), document.snippet()] {
                for term in normalizer.term_set(field)? {
                    if let Some(odds) = table.odds.get_mut(&term) {
                        odds.df_t += 1;
                        if relevant {
                            odds.s += 1;
                            odds.best_rank =
                                Some(odds.best_rank.map_or(rank, |best| best.min(rank)));
                        }
                    }
                }
            }
            Ok(())
        };

        for &position in feedback.relevant() {
            count(position, true)?;
        }
        for &position in feedback.not_relevant() {
            count(position, false)?;
        }

        for odds in table.odds.values_mut() {
            odds.score = offer_weight(odds.s, odds.df_t, relevant_fields, total_fields);
        }

        Ok(table)
    }

    /// `S`: number of relevant fields.
    pub fn relevant_fields(&self) -> usize {
        self.relevant_fields
    }

    /// `N`: number of fields in the result set.
    pub fn total_fields(&self) -> usize {
        self.total_fields
    }

    pub fn get(&self, term: &str) -> Option<&TermOdds> {
        self.odds.get(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms with their statistics, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermOdds)> + '_ {
        self.terms
            .iter()
            .filter_map(|term| self.odds.get(term).map(|odds| (term.as_str(), odds)))
    }

    /// Terms sorted by score descending, then best rank ascending.
    ///
    /// Terms absent from every relevant document sort after all others at
    /// equal score. Remaining ties keep first-appearance order.
    pub fn ranked(&self) -> Vec<(&str, &TermOdds)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            let a_rank = a.best_rank.unwrap_or(usize::MAX);
            let b_rank = b.best_rank.unwrap_or(usize::MAX);
            b.score.total_cmp(&a.score).then(a_rank.cmp(&b_rank))
        });
        ranked
    }
}

/// Ranks terms by their log-odds score, skipping stop words.
#[derive(Debug, Clone)]
pub struct LogOddsRanker {
    normalizer: DocumentNormalizer,
    stop_words: Arc<HashSet<String>>,
}

impl LogOddsRanker {
    /// Create a ranker that skips the given stop words.
    pub fn new(stop_words: Arc<HashSet<String>>) -> Result<Self> {
        Ok(LogOddsRanker {
            normalizer: DocumentNormalizer::new()?,
            stop_words,
        })
    }

    /// Build the statistics table for a result set.
    pub fn table(
        &self,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<TermOddsTable> {
        TermOddsTable::build(documents, feedback, &self.normalizer)
    }
}

impl Default for LogOddsRanker {
    fn default() -> Self {
        LogOddsRanker {
            normalizer: DocumentNormalizer::default(),
            stop_words: Arc::new(SMART_STOP_WORDS_SET.clone()),
        }
    }
}

impl TermRanker for LogOddsRanker {
    fn rank(
        &self,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<Vec<RankedTerm>> {
        check_inputs(query, documents, feedback)?;
        let table = self.table(documents, feedback)?;
        debug!(
            "Log-odds table: S={}, N={}, {} terms",
            table.relevant_fields(),
            table.total_fields(),
            table.len()
        );

        Ok(table
            .ranked()
            .into_iter()
            .filter(|(term, _)| !self.stop_words.contains(*term))
            .map(|(term, odds)| RankedTerm::new(term, odds.score))
            .collect())
    }

    fn name(&self) -> &str {
        "log-odds"
    }
}
