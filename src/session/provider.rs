//! Result providers: where each round's ranked documents come from.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use crate::document::{Document, SearchResult};
use crate::error::{RequeryError, Result};

/// Returns the ranked result set for a query.
pub trait ResultProvider {
    /// Fetch documents for `query`, ranked 1..=n.
    fn search(&mut self, query: &str) -> Result<Vec<Document>>;

    /// Get the name of this provider for logging.
    fn name(&self) -> &str;
}

/// Serves the same fixed result list for every query.
#[derive(Debug, Clone, Default)]
pub struct StaticResultProvider {
    results: Vec<SearchResult>,
}

impl StaticResultProvider {
    pub fn new(results: Vec<SearchResult>) -> Self {
        StaticResultProvider { results }
    }

    /// Provider backed by ready-made documents.
    ///
    /// Documents are re-ranked in slice order.
    pub fn from_documents(documents: &[Document]) -> Self {
        let results = documents
            .iter()
            .map(|doc| SearchResult {
                formatted_url: doc.url().to_string(),
                title: Some(doc.title().to_string()),
                snippet: Some(doc.snippet().to_string()),
                body: doc.body().map(str::to_string),
            })
            .collect();
        StaticResultProvider { results }
    }
}

impl ResultProvider for StaticResultProvider {
    fn search(&mut self, query: &str) -> Result<Vec<Document>> {
        debug!("Serving {} static results for '{query}'", self.results.len());
        Ok(Document::from_search_results(self.results.clone()))
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Reads a JSON array of raw search results from a file.
///
/// The file is read on every search so it can be edited between rounds.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileProvider {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the raw results in the file.
    pub fn load(&self) -> Result<Vec<SearchResult>> {
        let file = File::open(&self.path).map_err(|e| {
            RequeryError::provider(format!(
                "Cannot open results file {}: {e}",
                self.path.display()
            ))
        })?;
        let results: Vec<SearchResult> = serde_json::from_reader(BufReader::new(file))?;
        Ok(results)
    }
}

impl ResultProvider for JsonFileProvider {
    fn search(&mut self, query: &str) -> Result<Vec<Document>> {
        let results = self.load()?;
        debug!(
            "Loaded {} results for '{query}' from {}",
            results.len(),
            self.path.display()
        );
        Ok(Document::from_search_results(results))
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
