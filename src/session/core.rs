//! The search / judge / augment loop.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::document::{Relevance, RelevanceFeedback};
use crate::error::{RequeryError, Result};
use crate::expansion::QueryExpansion;

use super::collector::FeedbackCollector;
use super::config::SessionConfig;
use super::provider::ResultProvider;

/// Number of top results precision is measured over.
pub const PRECISION_CUTOFF: usize = 10;

/// Fraction of the first `k` labels that are relevant.
///
/// Only the labels that exist are counted, so a result set shorter than `k`
/// is measured over its own length. An empty set has precision 0.
pub fn precision_at_k(labels: &[Relevance], k: usize) -> f64 {
    let judged = &labels[..labels.len().min(k)];
    if judged.is_empty() {
        return 0.0;
    }
    let relevant = judged.iter().filter(|label| label.is_relevant()).count();
    relevant as f64 / judged.len() as f64
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Precision reached the target.
    TargetReached,
    /// No result was relevant, so there is nothing to learn from.
    PrecisionZero,
    /// Every candidate term was filtered out.
    NoNewTerms,
    /// The attempt budget ran out below the target.
    AttemptsExhausted,
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SessionOutcome::TargetReached => "Desired precision reached, done",
            SessionOutcome::PrecisionZero | SessionOutcome::NoNewTerms => {
                "Below desired precision, but can no longer augment the query"
            }
            SessionOutcome::AttemptsExhausted => {
                "Below desired precision, but max number of attempts has been reached."
            }
        };
        f.write_str(message)
    }
}

/// One round of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationReport {
    /// 1-based round number.
    pub attempt: usize,
    /// Query searched in this round.
    pub query: String,
    pub precision: f64,
    /// Relevant results among the judged ones.
    pub relevant: usize,
    /// Judged results.
    pub total: usize,
    /// Terms appended for the next round. Empty when the session stopped.
    pub added_terms: Vec<String>,
    pub started_at: DateTime<Utc>,
}

/// Summary of a whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Last query produced, searched or not.
    pub final_query: String,
    pub iterations: Vec<IterationReport>,
}

/// Hooks for reporting progress while a session runs.
pub trait SessionObserver {
    /// A new round is about to search `query`.
    fn attempt_started(&mut self, _attempt: usize, _query: &str) -> Result<()> {
        Ok(())
    }

    /// A round finished. `outcome` is set when the session stops here.
    fn iteration_finished(
        &mut self,
        _report: &IterationReport,
        _outcome: Option<SessionOutcome>,
    ) -> Result<()> {
        Ok(())
    }

    /// The session ended.
    fn session_finished(&mut self, _report: &SessionReport) -> Result<()> {
        Ok(())
    }
}

/// An observer that reports nothing.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl SessionObserver for SilentObserver {}

/// Drives rounds of search, relevance feedback and augmentation.
pub struct FeedbackSession {
    config: SessionConfig,
    engine: QueryExpansion,
    provider: Box<dyn ResultProvider>,
    collector: Box<dyn FeedbackCollector>,
}

impl FeedbackSession {
    /// Create a session. The configuration is validated here.
    pub fn new(
        config: SessionConfig,
        stop_words: HashSet<String>,
        provider: Box<dyn ResultProvider>,
        collector: Box<dyn FeedbackCollector>,
    ) -> Result<Self> {
        config.validate()?;
        let engine = QueryExpansion::with_config(config.augmentation.clone(), Arc::new(stop_words))?;

        Ok(FeedbackSession {
            config,
            engine,
            provider,
            collector,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session without progress reporting.
    pub fn run(&mut self, query: &str) -> Result<SessionReport> {
        self.run_with_observer(query, &mut SilentObserver)
    }

    /// Run the session from `query` until it stops.
    pub fn run_with_observer(
        &mut self,
        query: &str,
        observer: &mut dyn SessionObserver,
    ) -> Result<SessionReport> {
        let mut query = query.trim().to_string();
        if query.is_empty() {
            return Err(RequeryError::invalid_argument("query must not be empty"));
        }

        let mut iterations = Vec::new();

        for attempt in 1..=self.config.max_attempts {
            info!("Attempt {attempt}/{}: '{query}'", self.config.max_attempts);
            observer.attempt_started(attempt, &query)?;
            let started_at = Utc::now();

            let documents = self.provider.search(&query)?;
            if documents.is_empty() {
                warn!("{} returned no results for '{query}'", self.provider.name());
                return Err(RequeryError::empty_document_set(query));
            }

            let labels = self.collector.collect(&documents)?;
            let feedback = RelevanceFeedback::from_labels(&labels);
            feedback.validate(documents.len())?;

            let cutoff = documents.len().min(PRECISION_CUTOFF);
            let precision = precision_at_k(&labels, PRECISION_CUTOFF);
            let relevant = labels[..cutoff].iter().filter(|l| l.is_relevant()).count();

            let mut report = IterationReport {
                attempt,
                query: query.clone(),
                precision,
                relevant,
                total: cutoff,
                added_terms: Vec::new(),
                started_at,
            };

            let outcome = if precision == 0.0 {
                Some(SessionOutcome::PrecisionZero)
            } else if precision >= self.config.target_precision {
                Some(SessionOutcome::TargetReached)
            } else {
                let augmentation = self.engine.augment(&query, &documents, &feedback)?;
                if augmentation.progressed {
                    report.added_terms = augmentation.added_terms;
                    query = augmentation.query;
                    None
                } else {
                    Some(SessionOutcome::NoNewTerms)
                }
            };

            debug!("Attempt {attempt} precision {precision:.2}, outcome {outcome:?}");
            observer.iteration_finished(&report, outcome)?;
            iterations.push(report);

            if let Some(outcome) = outcome {
                return self.finish(outcome, query, iterations, observer);
            }
        }

        self.finish(SessionOutcome::AttemptsExhausted, query, iterations, observer)
    }

    fn finish(
        &self,
        outcome: SessionOutcome,
        final_query: String,
        iterations: Vec<IterationReport>,
        observer: &mut dyn SessionObserver,
    ) -> Result<SessionReport> {
        info!("Session stopped after {} attempts: {outcome:?}", iterations.len());
        let report = SessionReport {
            outcome,
            final_query,
            iterations,
        };
        observer.session_finished(&report)?;
        Ok(report)
    }
}

impl fmt::Debug for FeedbackSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackSession")
            .field("config", &self.config)
            .field("provider", &self.provider.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::session::{
        BuiltinStopWords, ScriptedFeedbackCollector, StaticResultProvider, StopWordSource,
    };

    fn documents() -> Vec<Document> {
        vec![
            Document::new(1, "a", "Friends - Netflix", "Stream now"),
            Document::new(2, "b", "Friends sitcom", "Created by David Crane and Marta Kauffman"),
            Document::new(3, "c", "Friends cast", "David Crane and Marta Kauffman"),
            Document::new(4, "d", "Friends of the Earth", "Climate campaign"),
        ]
    }

    fn session(target: f64, max_attempts: usize, rounds: Vec<Vec<usize>>) -> FeedbackSession {
        let config = SessionConfig {
            max_attempts,
            ..SessionConfig::new(target)
        };
        FeedbackSession::new(
            config,
            BuiltinStopWords.load().unwrap(),
            Box::new(StaticResultProvider::from_documents(&documents())),
            Box::new(ScriptedFeedbackCollector::from_relevant_ranks(rounds, 4)),
        )
        .unwrap()
    }

    #[test]
    fn test_precision_at_k() {
        use Relevance::*;
        assert_eq!(precision_at_k(&[], 10), 0.0);
        assert_eq!(precision_at_k(&[Relevant, NotRelevant], 10), 0.5);
        assert_eq!(precision_at_k(&[Relevant, NotRelevant, NotRelevant], 1), 1.0);
    }

    #[test]
    fn test_target_reached_on_first_attempt() {
        let report = session(0.5, 5, vec![vec![2, 3]]).run("friends").unwrap();

        assert_eq!(report.outcome, SessionOutcome::TargetReached);
        assert_eq!(report.iterations.len(), 1);
        assert_eq!(report.final_query, "friends");
        assert_eq!(report.iterations[0].relevant, 2);
        assert_eq!(report.iterations[0].total, 4);
    }

    #[test]
    fn test_precision_zero_stops() {
        let report = session(0.9, 5, vec![vec![]]).run("friends").unwrap();
        assert_eq!(report.outcome, SessionOutcome::PrecisionZero);
        assert!(report.iterations[0].added_terms.is_empty());
    }

    #[test]
    fn test_augments_until_attempts_exhausted() {
        let report = session(0.9, 2, vec![vec![2, 3], vec![2, 3]])
            .run("friends")
            .unwrap();

        assert_eq!(report.outcome, SessionOutcome::AttemptsExhausted);
        assert_eq!(report.iterations.len(), 2);
        assert_eq!(report.iterations[0].added_terms.len(), 2);
        let first = &report.iterations[0];
        let expected = format!("{} {}", first.query, first.added_terms.join(" "));
        assert_eq!(report.iterations[1].query, expected);
        assert!(report.final_query.starts_with(&report.iterations[1].query));
    }

    #[test]
    fn test_empty_results_fail_fast() {
        let mut session = FeedbackSession::new(
            SessionConfig::new(0.9),
            HashSet::new(),
            Box::new(StaticResultProvider::default()),
            Box::new(ScriptedFeedbackCollector::default()),
        )
        .unwrap();

        assert!(matches!(session.run("friends"), Err(RequeryError::EmptyDocumentSet(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = FeedbackSession::new(
            SessionConfig::new(2.0),
            HashSet::new(),
            Box::new(StaticResultProvider::default()),
            Box::new(ScriptedFeedbackCollector::default()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(SessionOutcome::TargetReached.to_string(), "Desired precision reached, done");
        assert_eq!(
            SessionOutcome::NoNewTerms.to_string(),
            SessionOutcome::PrecisionZero.to_string()
        );
    }
}
