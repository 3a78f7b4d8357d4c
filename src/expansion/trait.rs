//! Term ranker trait definition.

use crate::document::{Document, RelevanceFeedback};
use crate::error::{RequeryError, Result};

use super::types::RankedTerm;

/// Ranks candidate expansion terms from a labeled result set.
///
/// Implementations rebuild every statistic they need from `documents` on each
/// call; nothing carries over between iterations.
pub trait TermRanker: Send + Sync {
    /// Rank candidate terms, best first.
    ///
    /// # Arguments
    /// * `query` - The current query string
    /// * `documents` - The current result set, in rank order
    /// * `feedback` - Relevance partition over `documents`
    fn rank(
        &self,
        query: &str,
        documents: &[Document],
        feedback: &RelevanceFeedback,
    ) -> Result<Vec<RankedTerm>>;

    /// Get the name of this ranker for debugging and logging.
    fn name(&self) -> &str;
}

/// Fail on an empty result set or on a partition that does not cover
/// `documents` exactly once.
pub(crate) fn check_inputs(
    query: &str,
    documents: &[Document],
    feedback: &RelevanceFeedback,
) -> Result<()> {
    if documents.is_empty() {
        return Err(RequeryError::empty_document_set(query));
    }
    feedback.validate(documents.len())
}
