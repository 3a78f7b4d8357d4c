//! # Requery
//!
//! Interactive relevance-feedback query expansion.
//!
//! Given a query and a target precision, a session fetches ranked results,
//! asks for a relevant / not-relevant judgment per result and appends the
//! terms that best separate the two groups, repeating until the target is
//! met or nothing more can be learned.
//!
//! ## Features
//!
//! - Rocchio expansion over a per-round TF-IDF vector space
//! - Robertson/Sparck-Jones log-odds term weighting with 0.5 smoothing
//! - Pluggable result providers, feedback collectors and stop word sources
//! - Google Custom Search provider and an offline JSON file provider

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod expansion;
pub mod session;
pub mod tfidf;

pub mod prelude {
    pub use crate::document::{Document, Relevance, RelevanceFeedback, SearchResult};
    pub use crate::error::{RequeryError, Result};
    pub use crate::expansion::{
        Augmentation, AugmentationConfig, QueryExpansion, Strategy, TermRanker, augment,
    };
    pub use crate::session::{FeedbackSession, SessionConfig, SessionOutcome};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
