//! Feedback collectors: where relevance judgments come from.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::document::{Document, Relevance};
use crate::error::{RequeryError, Result};

/// Returns one relevance label per document, in display order.
pub trait FeedbackCollector {
    fn collect(&mut self, documents: &[Document]) -> Result<Vec<Relevance>>;
}

/// Asks a human for a yes/no judgment per result.
///
/// Every result is printed as a block and followed by a `Relevant (Y/N)?`
/// prompt. An answer of `y` (any case, surrounding whitespace ignored) marks
/// the result relevant; anything else marks it not relevant.
///
/// # Examples
///
/// ```
/// use requery::document::{Document, Relevance};
/// use requery::session::{FeedbackCollector, TerminalFeedbackCollector};
///
/// let input = b"Y\nn\n";
/// let mut output = Vec::new();
/// let mut collector = TerminalFeedbackCollector::new(&input[..], &mut output);
///
/// let documents = vec![
///     Document::new(1, "https://es.wikipedia.org/wiki/Friends", "Friends - Wikipedia", ""),
///     Document::new(2, "https://www.netflix.com/", "Friends - Netflix", ""),
/// ];
/// let labels = collector.collect(&documents).unwrap();
/// assert_eq!(labels, vec![Relevance::Relevant, Relevance::NotRelevant]);
/// ```
pub struct TerminalFeedbackCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFeedbackCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalFeedbackCollector { input, output }
    }

    /// Consume the collector and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, index: usize, document: &Document) -> Result<Relevance> {
        writeln!(self.output, "Result {}", index + 1)?;
        writeln!(self.output, "[")?;
        writeln!(self.output, "URL: {}", document.url())?;
        writeln!(self.output, "Title: {}", document.title())?;
        writeln!(self.output, "Description: {}", document.snippet())?;
        writeln!(self.output, "]")?;
        writeln!(self.output)?;
        write!(self.output, "Relevant (Y/N)?")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(RequeryError::feedback(format!(
                "Input closed before result {} was judged",
                index + 1
            )));
        }
        writeln!(self.output, "----------------------")?;

        Ok(Relevance::from(answer.trim().eq_ignore_ascii_case("y")))
    }
}

impl<R: BufRead, W: Write> FeedbackCollector for TerminalFeedbackCollector<R, W> {
    fn collect(&mut self, documents: &[Document]) -> Result<Vec<Relevance>> {
        writeln!(self.output, "Google Search Results:")?;
        writeln!(self.output, "======================")?;

        let labels = documents
            .iter()
            .enumerate()
            .map(|(i, document)| self.ask(i, document))
            .collect::<Result<Vec<_>>>()?;

        writeln!(self.output, "======================")?;
        Ok(labels)
    }
}

/// Replays pre-recorded judgments, one round per call.
///
/// A round shorter than the result set labels the remaining documents not
/// relevant; extra labels are ignored.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFeedbackCollector {
    rounds: VecDeque<Vec<Relevance>>,
}

impl ScriptedFeedbackCollector {
    pub fn new<I>(rounds: I) -> Self
    where
        I: IntoIterator<Item = Vec<Relevance>>,
    {
        ScriptedFeedbackCollector {
            rounds: rounds.into_iter().collect(),
        }
    }

    /// Mark the given 1-based ranks relevant in every listed round.
    pub fn from_relevant_ranks<I>(rounds: I, document_count: usize) -> Self
    where
        I: IntoIterator<Item = Vec<usize>>,
    {
        Self::new(rounds.into_iter().map(|ranks| {
            (1..=document_count)
                .map(|rank| Relevance::from(ranks.contains(&rank)))
                .collect()
        }))
    }

    /// Rounds not yet replayed.
    pub fn remaining(&self) -> usize {
        self.rounds.len()
    }
}

impl FeedbackCollector for ScriptedFeedbackCollector {
    fn collect(&mut self, documents: &[Document]) -> Result<Vec<Relevance>> {
        let mut round = self
            .rounds
            .pop_front()
            .ok_or_else(|| RequeryError::feedback("No scripted feedback left"))?;
        round.resize(documents.len(), Relevance::NotRelevant);
        Ok(round)
    }
}
