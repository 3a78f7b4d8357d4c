//! Document text normalization.
//!
//! The normalizer lowercases text, turns hyphens into spaces and then drops
//! every character outside `[a-z' ]`. It never stems. Its output is what the
//! log-odds model counts terms over and what candidate membership checks use.
//!
//! # Examples
//!
//! ```
//! use requery::document::DocumentNormalizer;
//!
//! let normalizer = DocumentNormalizer::new().unwrap();
//! assert_eq!(normalizer.normalize("Anne-Marie's FRIENDS (1994)"), "anne marie's friends ");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{LowercaseCharFilter, PatternReplaceCharFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::document::Document;
use crate::error::Result;

/// Characters removed after hyphens have become spaces.
const DISALLOWED_CHARS: &str = r"[^a-z' ]+";

/// Produces comparable term sets for documents and fields.
#[derive(Debug, Clone)]
pub struct DocumentNormalizer {
    pipeline: PipelineAnalyzer,
}

impl DocumentNormalizer {
    /// Create a normalizer with the letters/apostrophe/space rule.
    pub fn new() -> Result<Self> {
        let pipeline = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new("-", " ")?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::remove(DISALLOWED_CHARS)?))
            .with_name("normalizer");

        Ok(DocumentNormalizer { pipeline })
    }

    /// Normalize a piece of text.
    pub fn normalize(&self, text: &str) -> String {
        self.pipeline.normalize_text(text)
    }

    /// Normalized terms of a piece of text, in order, duplicates kept.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        self.pipeline.terms(text)
    }

    /// Distinct normalized terms of a piece of text.
    pub fn term_set(&self, text: &str) -> Result<HashSet<String>> {
        Ok(self.terms(text)?.into_iter().collect())
    }

    /// Normalized joint text of a document.
    pub fn normalize_document(&self, document: &Document) -> String {
        self.normalize(&document.joint_text())
    }
}

impl Default for DocumentNormalizer {
    fn default() -> Self {
        Self::new().expect("Document normalizer patterns should be valid")
    }
}
