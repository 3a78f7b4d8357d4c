//! Common types for query augmentation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Term ranking strategy used to pick augmentation candidates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Rocchio relevance feedback over a TF-IDF vector space.
    #[default]
    Rocchio,
    /// Robertson/Sparck-Jones log-odds term weighting.
    #[serde(alias = "odds")]
    #[value(alias = "odds")]
    LogOdds,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Rocchio => "rocchio",
            Strategy::LogOdds => "log-odds",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate term with the score its ranker assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub score: f64,
}

impl RankedTerm {
    pub fn new<S: Into<String>>(term: S, score: f64) -> Self {
        RankedTerm {
            term: term.into(),
            score,
        }
    }
}

/// Result of one augmentation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Augmentation {
    /// The augmented query. Always starts with the input query.
    pub query: String,
    /// Terms appended to the input query, in order.
    pub added_terms: Vec<String>,
    /// Whether any term was appended.
    pub progressed: bool,
}

impl Augmentation {
    /// An augmentation that leaves the query unchanged.
    pub fn unchanged<S: Into<String>>(query: S) -> Self {
        Augmentation {
            query: query.into(),
            added_terms: Vec::new(),
            progressed: false,
        }
    }
}
