//! Text analysis for Requery.
//!
//! Char filters, tokenizers and token filters are combined by analyzers.
//! Two pipelines exist and tokenize differently:
//!
//! - [`EnglishAnalyzer`] feeds the TF-IDF vectorizer (word regex, lowercase,
//!   English stop words).
//! - [`DocumentNormalizer`](crate::document::DocumentNormalizer) produces the
//!   cleaned term sets the log-odds model counts.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
