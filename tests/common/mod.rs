#![allow(dead_code)]

use std::path::PathBuf;

use requery::document::{Document, Relevance, RelevanceFeedback, SearchResult};
use requery::error::Result;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/friends.json")
}

/// The ten "friends" results, ranked 1..=10.
pub fn friends_documents() -> Result<Vec<Document>> {
    let text = std::fs::read_to_string(fixture_path())?;
    let raw: Vec<SearchResult> = serde_json::from_str(&text)?;
    Ok(Document::from_search_results(raw))
}

/// Wikipedia (rank 2) and IMDb (rank 3) relevant, everything else not.
pub fn sitcom_feedback(document_count: usize) -> RelevanceFeedback {
    let labels: Vec<Relevance> = (1..=document_count)
        .map(|rank| Relevance::from(rank == 2 || rank == 3))
        .collect();
    RelevanceFeedback::from_labels(&labels)
}
