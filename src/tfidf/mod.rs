//! TF-IDF vector space over a single result set.
//!
//! The vectorizer is fitted on the joint text of the current documents only.
//! Vocabulary and IDF weights are rebuilt for every iteration; there is no
//! persistent index.

pub mod term_vector;
pub mod vectorizer;

pub use term_vector::TermVector;
pub use vectorizer::TfIdfVectorizer;
