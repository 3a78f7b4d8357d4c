//! Binary relevance judgments over a result set.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{RequeryError, Result};

/// A single relevance judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    Relevant,
    NotRelevant,
}

impl Relevance {
    pub fn is_relevant(self) -> bool {
        matches!(self, Relevance::Relevant)
    }
}

impl From<bool> for Relevance {
    fn from(relevant: bool) -> Self {
        if relevant {
            Relevance::Relevant
        } else {
            Relevance::NotRelevant
        }
    }
}

/// A partition of the current result set into relevant and not-relevant
/// documents.
///
/// Both groups hold positions into the document slice the feedback was
/// collected for, in display order. Every position appears in exactly one
/// group. The partition is rebuilt for every iteration.
///
/// # Examples
///
/// ```
/// use requery::document::{Relevance, RelevanceFeedback};
///
/// let feedback = RelevanceFeedback::from_labels(&[
///     Relevance::NotRelevant,
///     Relevance::Relevant,
///     Relevance::Relevant,
/// ]);
///
/// assert_eq!(feedback.relevant(), &[1, 2]);
/// assert_eq!(feedback.not_relevant(), &[0]);
/// assert!((feedback.precision() - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceFeedback {
    relevant: Vec<usize>,
    not_relevant: Vec<usize>,
}

impl RelevanceFeedback {
    /// Build a partition from one label per document, in display order.
    pub fn from_labels(labels: &[Relevance]) -> Self {
        let (relevant, not_relevant): (Vec<_>, Vec<_>) =
            (0..labels.len()).partition(|&i| labels[i].is_relevant());

        RelevanceFeedback {
            relevant,
            not_relevant,
        }
    }

    /// Build a partition from explicit groups of positions.
    ///
    /// Both groups are sorted into display order. Use [`validate`](Self::validate)
    /// to check them against a document set.
    pub fn from_groups(mut relevant: Vec<usize>, mut not_relevant: Vec<usize>) -> Self {
        relevant.sort_unstable();
        not_relevant.sort_unstable();

        RelevanceFeedback {
            relevant,
            not_relevant,
        }
    }

    /// Check that the partition covers positions `0..document_count` exactly once.
    pub fn validate(&self, document_count: usize) -> Result<()> {
        let mut seen = vec![false; document_count];

        for &position in self.relevant.iter().chain(&self.not_relevant) {
            match seen.get_mut(position) {
                None => {
                    return Err(RequeryError::feedback(format!(
                        "Document position {position} is outside a result set of {document_count}"
                    )));
                }
                Some(true) => {
                    return Err(RequeryError::feedback(format!(
                        "Document position {position} is labeled more than once"
                    )));
                }
                Some(flag) => *flag = true,
            }
        }

        if let Some(missing) = seen.iter().position(|&labeled| !labeled) {
            return Err(RequeryError::feedback(format!(
                "Document position {missing} has no relevance label"
            )));
        }

        Ok(())
    }

    pub fn relevant(&self) -> &[usize] {
        &self.relevant
    }

    pub fn not_relevant(&self) -> &[usize] {
        &self.not_relevant
    }

    pub fn relevant_count(&self) -> usize {
        self.relevant.len()
    }

    pub fn not_relevant_count(&self) -> usize {
        self.not_relevant.len()
    }

    /// Total number of judged documents.
    pub fn total(&self) -> usize {
        self.relevant.len() + self.not_relevant.len()
    }

    /// Fraction of judged documents marked relevant; 0.0 when nothing was judged.
    pub fn precision(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.relevant.len() as f64 / total as f64,
        }
    }

    /// Label of the document at `position`, if it was judged.
    pub fn label(&self, position: usize) -> Option<Relevance> {
        if self.relevant.contains(&position) {
            Some(Relevance::Relevant)
        } else if self.not_relevant.contains(&position) {
            Some(Relevance::NotRelevant)
        } else {
            None
        }
    }

    /// Relevant documents of `documents`, in display order.
    pub fn relevant_documents<'a>(
        &'a self,
        documents: &'a [Document],
    ) -> impl Iterator<Item = &'a Document> + 'a {
        self.relevant.iter().filter_map(|&i| documents.get(i))
    }

    /// Not-relevant documents of `documents`, in display order.
    pub fn not_relevant_documents<'a>(
        &'a self,
        documents: &'a [Document],
    ) -> impl Iterator<Item = &'a Document> + 'a {
        self.not_relevant.iter().filter_map(|&i| documents.get(i))
    }
}
