mod common;

use std::collections::HashSet;

use requery::document::{DocumentNormalizer, RelevanceFeedback};
use requery::error::Result;
use requery::expansion::odds::offer_weight;
use requery::expansion::{
    AugmentationConfig, LogOddsRanker, Strategy, TermOddsTable, TermRanker, augment,
};

use common::{friends_documents, sitcom_feedback};

#[test]
fn log_odds_table_matches_sitcom_feedback() -> Result<()> {
    let documents = friends_documents()?;
    let feedback = sitcom_feedback(documents.len());
    let table = TermOddsTable::build(&documents, &feedback, &DocumentNormalizer::new()?)?;

    assert_eq!(table.relevant_fields(), 4);
    assert_eq!(table.total_fields(), 20);

    let top = offer_weight(2, 2, 4, 20);
    assert!((top - 33f64.ln()).abs() < 1e-12);

    for term in ["created", "david", "crane", "marta", "kauffman"] {
        let odds = table.get(term).expect("term in table");
        assert_eq!((odds.s, odds.df_t, odds.best_rank), (2, 2, Some(2)), "{term}");
        assert!((odds.score - top).abs() < 1e-12, "{term}");
    }

    let netflix = table.get("netflix").expect("netflix in table");
    assert_eq!(netflix.s, 0);
    assert_eq!(netflix.best_rank, None);
    assert!(netflix.score < top);
    Ok(())
}

#[test]
fn log_odds_augmentation_uses_relevant_only_vocabulary() -> Result<()> {
    let documents = friends_documents()?;
    let feedback = sitcom_feedback(documents.len());

    let augmentation = augment(
        Strategy::LogOdds,
        "friends",
        &documents,
        &feedback,
        &AugmentationConfig::default(),
    )?;

    assert!(augmentation.progressed);
    assert_eq!(augmentation.query, "friends created david");

    let relevant_only: HashSet<&str> = ["created", "david", "crane", "marta", "kauffman"]
        .into_iter()
        .collect();
    for term in &augmentation.added_terms {
        assert!(relevant_only.contains(term.as_str()), "{term}");
    }
    Ok(())
}

#[test]
fn log_odds_ranking_is_ordered_and_stop_word_free() -> Result<()> {
    let documents = friends_documents()?;
    let feedback = sitcom_feedback(documents.len());
    let ranker = LogOddsRanker::default();

    let ranked = ranker.rank("friends", &documents, &feedback)?;
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(ranked.iter().all(|t| t.term != "by" && t.term != "the"));
    Ok(())
}

#[test]
fn log_odds_all_not_relevant_ranks_without_failing() -> Result<()> {
    let documents = friends_documents()?;
    let feedback = RelevanceFeedback::from_groups(vec![], (0..documents.len()).collect());

    let ranked = LogOddsRanker::default().rank("friends", &documents, &feedback)?;
    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|t| t.score.is_finite()));

    // The query term is in nearly every field, so it is the most penalized.
    let friends = ranked.iter().find(|t| t.term == "friends").expect("friends ranked");
    assert!(ranked.iter().all(|t| t.score >= friends.score));
    Ok(())
}
