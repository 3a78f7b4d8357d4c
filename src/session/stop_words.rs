//! Stop word sources for candidate filtering.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::blocking::Client;

use crate::analysis::token_filter::stop::SMART_STOP_WORDS_SET;
use crate::error::{RequeryError, Result};

/// Produces a fixed set of stop words.
pub trait StopWordSource {
    fn load(&self) -> Result<HashSet<String>>;

    /// Get the name of this source for logging.
    fn name(&self) -> &str;
}

/// Parse a newline separated word list. Blank lines are skipped and words
/// are trimmed and lowercased.
pub fn parse_stop_words(text: &str) -> HashSet<String> {
    text.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// The embedded SMART-style list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStopWords;

impl StopWordSource for BuiltinStopWords {
    fn load(&self) -> Result<HashSet<String>> {
        Ok(SMART_STOP_WORDS_SET.clone())
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

/// A newline separated word list on disk.
#[derive(Debug, Clone)]
pub struct FileStopWords {
    path: PathBuf,
}

impl FileStopWords {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileStopWords {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StopWordSource for FileStopWords {
    fn load(&self) -> Result<HashSet<String>> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            RequeryError::provider(format!(
                "Cannot read stop words from {}: {e}",
                self.path.display()
            ))
        })?;
        let words = parse_stop_words(&text);
        debug!("Loaded {} stop words from {}", words.len(), self.path.display());
        Ok(words)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// A newline separated word list fetched over HTTP.
#[derive(Debug, Clone)]
pub struct UrlStopWords {
    url: String,
}

impl UrlStopWords {
    pub fn new<U: Into<String>>(url: U) -> Self {
        UrlStopWords { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StopWordSource for UrlStopWords {
    fn load(&self) -> Result<HashSet<String>> {
        info!("Fetching stop words from {}", self.url);
        let response = Client::builder().build()?.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequeryError::provider(format!(
                "Stop word list at {} returned {status}",
                self.url
            )));
        }

        let words = parse_stop_words(&response.text()?);
        if words.is_empty() {
            return Err(RequeryError::provider(format!(
                "Stop word list at {} is empty",
                self.url
            )));
        }
        Ok(words)
    }

    fn name(&self) -> &str {
        "url"
    }
}
