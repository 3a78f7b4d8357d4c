//! Interactive relevance-feedback sessions.
//!
//! A session repeats three steps until it stops: fetch the ranked results of
//! the current query from a [`ResultProvider`], collect a relevance label per
//! result from a [`FeedbackCollector`], and augment the query. It stops when
//! precision@10 reaches the target, drops to zero, when the augmenter finds no
//! new term, or after `max_attempts` rounds.

mod collector;
mod config;
mod core;
mod google;
mod provider;
mod stop_words;

pub use collector::{FeedbackCollector, ScriptedFeedbackCollector, TerminalFeedbackCollector};
pub use config::{DEFAULT_MAX_ATTEMPTS, SessionConfig};
pub use self::core::{
    FeedbackSession, IterationReport, PRECISION_CUTOFF, SessionObserver, SessionOutcome,
    SessionReport, SilentObserver, precision_at_k,
};
pub use google::{CUSTOM_SEARCH_ENDPOINT, GoogleCustomSearchProvider};
pub use provider::{JsonFileProvider, ResultProvider, StaticResultProvider};
pub use stop_words::{
    BuiltinStopWords, FileStopWords, StopWordSource, UrlStopWords, parse_stop_words,
};
