//! Error types for the Requery library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`RequeryError`] enum.
//!
//! # Examples
//!
//! ```
//! use requery::error::{RequeryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RequeryError::config("max_new_terms must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Requery operations.
///
/// Empty feedback groups and augmentations that add nothing are not errors:
/// they are reported through
/// [`Augmentation::progressed`](crate::expansion::Augmentation) instead.
#[derive(Error, Debug)]
pub enum RequeryError {
    /// I/O errors (files, terminal).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The result provider returned no documents, so there is no corpus to
    /// learn expansion terms from.
    #[error("Empty document set: no results were returned for query '{0}'")]
    EmptyDocumentSet(String),

    /// Relevance labels that do not partition the document set.
    #[error("Feedback error: {0}")]
    Feedback(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Result provider or stop-word source failures.
    #[error("Provider error: {0}")]
    Provider(String),

    /// HTTP transport errors.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with RequeryError.
pub type Result<T> = std::result::Result<T, RequeryError>;

impl RequeryError {
    /// Create a new empty document set error for the given query.
    pub fn empty_document_set<S: Into<String>>(query: S) -> Self {
        RequeryError::EmptyDocumentSet(query.into())
    }

    /// Create a new feedback error.
    pub fn feedback<S: Into<String>>(msg: S) -> Self {
        RequeryError::Feedback(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RequeryError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RequeryError::Analysis(msg.into())
    }

    /// Create a new provider error.
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        RequeryError::Provider(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RequeryError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RequeryError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
