mod common;

use std::io::Write;
use std::sync::Arc;

use requery::document::{Document, Relevance, RelevanceFeedback};
use requery::error::{RequeryError, Result};
use requery::analysis::token_filter::stop::SMART_STOP_WORDS_SET;
use requery::expansion::{AugmentationConfig, Strategy, augment, augment_odds, augment_rocchio};
use requery::session::{
    BuiltinStopWords, FeedbackSession, FileStopWords, JsonFileProvider, ScriptedFeedbackCollector,
    SessionConfig, SessionOutcome, StopWordSource, TerminalFeedbackCollector,
};
use tempfile::NamedTempFile;

use common::fixture_path;

fn log_odds_config(target_precision: f64, max_attempts: usize) -> SessionConfig {
    SessionConfig {
        target_precision,
        max_attempts,
        augmentation: AugmentationConfig::with_strategy(Strategy::LogOdds),
    }
}

#[test]
fn session_over_fixture_file_augments_then_reaches_target() -> Result<()> {
    let collector = ScriptedFeedbackCollector::from_relevant_ranks(
        vec![vec![2, 3], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]],
        10,
    );
    let mut session = FeedbackSession::new(
        log_odds_config(0.9, 5),
        BuiltinStopWords.load()?,
        Box::new(JsonFileProvider::new(fixture_path())),
        Box::new(collector),
    )?;

    let report = session.run("friends")?;

    assert_eq!(report.outcome, SessionOutcome::TargetReached);
    assert_eq!(report.iterations.len(), 2);
    assert_eq!(report.iterations[0].precision, 0.2);
    assert_eq!(report.iterations[0].added_terms, vec!["created", "david"]);
    assert_eq!(report.iterations[1].query, "friends created david");
    assert_eq!(report.iterations[1].precision, 0.9);
    assert_eq!(report.final_query, "friends created david");
    Ok(())
}

#[test]
fn session_stops_when_nothing_is_relevant() -> Result<()> {
    let mut session = FeedbackSession::new(
        log_odds_config(0.9, 5),
        BuiltinStopWords.load()?,
        Box::new(JsonFileProvider::new(fixture_path())),
        Box::new(ScriptedFeedbackCollector::from_relevant_ranks(vec![vec![]], 10)),
    )?;

    let report = session.run("friends")?;
    assert_eq!(report.outcome, SessionOutcome::PrecisionZero);
    assert_eq!(report.final_query, "friends");
    Ok(())
}

#[test]
fn session_reports_no_new_terms_when_all_candidates_are_stop_words() -> Result<()> {
    let documents = vec![
        Document::new(1, "a", "Friends", "the show"),
        Document::new(2, "b", "Friends", "the sitcom"),
    ];
    let mut results = NamedTempFile::new()?;
    write!(
        results,
        r#"[{{"formattedUrl": "a", "title": "Friends", "snippet": "the show"}},
            {{"formattedUrl": "b", "title": "Friends", "snippet": "the sitcom"}}]"#
    )?;
    let mut stop_file = NamedTempFile::new()?;
    writeln!(stop_file, "the\nshow\nsitcom\nfriends")?;

    let mut session = FeedbackSession::new(
        log_odds_config(0.9, 5),
        FileStopWords::new(stop_file.path()).load()?,
        Box::new(JsonFileProvider::new(results.path())),
        Box::new(ScriptedFeedbackCollector::from_relevant_ranks(
            vec![vec![2]],
            documents.len(),
        )),
    )?;

    let report = session.run("Friends")?;
    assert_eq!(report.outcome, SessionOutcome::NoNewTerms);
    assert_eq!(report.final_query, "Friends");
    Ok(())
}

#[test]
fn session_with_terminal_answers() -> Result<()> {
    let answers = "n\ny\ny\nn\nn\nn\nn\nn\nn\nn\n";
    let collector = TerminalFeedbackCollector::new(answers.as_bytes(), Vec::new());
    let mut session = FeedbackSession::new(
        SessionConfig {
            max_attempts: 1,
            ..SessionConfig::new(0.9)
        },
        BuiltinStopWords.load()?,
        Box::new(JsonFileProvider::new(fixture_path())),
        Box::new(collector),
    )?;

    let report = session.run("friends")?;
    assert_eq!(report.outcome, SessionOutcome::AttemptsExhausted);
    assert_eq!(report.iterations[0].relevant, 2);
    assert_eq!(report.iterations[0].added_terms.len(), 2);
    assert!(report.final_query.starts_with("friends "));
    Ok(())
}

#[test]
fn single_relevant_document_is_a_valid_boundary() -> Result<()> {
    let documents = vec![Document::new(
        1,
        "https://es.wikipedia.org/wiki/Friends",
        "Friends - Wikipedia",
        "Friends is an American sitcom",
    )];
    let feedback = RelevanceFeedback::from_labels(&[Relevance::Relevant]);

    for strategy in [Strategy::Rocchio, Strategy::LogOdds] {
        let augmentation = augment(
            strategy,
            "friends",
            &documents,
            &feedback,
            &AugmentationConfig::default(),
        )?;
        assert!(augmentation.query.starts_with("friends"));
        assert!(augmentation.added_terms.len() <= 2);
    }
    Ok(())
}

#[test]
fn empty_result_set_is_an_error() {
    let result = augment(
        Strategy::Rocchio,
        "friends",
        &[],
        &RelevanceFeedback::default(),
        &AugmentationConfig::default(),
    );
    assert!(matches!(result, Err(RequeryError::EmptyDocumentSet(_))));
}

#[test]
fn ranking_functions_fail_fast_on_empty_result_set() {
    let stop_words = Arc::new(SMART_STOP_WORDS_SET.clone());
    let feedback = RelevanceFeedback::default();

    assert!(matches!(
        augment_rocchio("friends", &[], &feedback),
        Err(RequeryError::EmptyDocumentSet(q)) if q == "friends"
    ));
    assert!(matches!(
        augment_odds("friends", &[], &feedback, stop_words),
        Err(RequeryError::EmptyDocumentSet(q)) if q == "friends"
    ));
}

#[test]
fn ranking_functions_reject_partition_outside_result_set() {
    let documents = vec![Document::new(
        1,
        "https://es.wikipedia.org/wiki/Friends",
        "Friends - Wikipedia",
        "Friends is an American sitcom created by David Crane",
    )];
    let feedback = RelevanceFeedback::from_groups(vec![0, 5], vec![]);
    let stop_words = Arc::new(SMART_STOP_WORDS_SET.clone());

    assert!(matches!(
        augment_rocchio("friends", &documents, &feedback),
        Err(RequeryError::Feedback(_))
    ));
    assert!(matches!(
        augment_odds("friends", &documents, &feedback, stop_words),
        Err(RequeryError::Feedback(_))
    ));
}
