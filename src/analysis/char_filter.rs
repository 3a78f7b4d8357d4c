//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer. The
//! document normalizer uses them to turn hyphens into spaces and to drop
//! every character outside the letters/apostrophe/space alphabet.
//!
//! # Examples
//!
//! ```
//! use requery::analysis::char_filter::CharFilter;
//! use requery::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"-", " ").unwrap();
//! assert_eq!(filter.filter("anne-marie"), "anne marie");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
