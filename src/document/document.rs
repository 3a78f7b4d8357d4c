//! Ranked search result documents.

use serde::{Deserialize, Serialize};

/// A raw search result item as returned by a result provider.
///
/// Field names follow the Custom Search JSON API item shape. Title and
/// snippet may be missing upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Display URL of the result.
    pub formatted_url: String,
    /// Result title, if present.
    #[serde(default)]
    pub title: Option<String>,
    /// Result snippet, if present.
    #[serde(default)]
    pub snippet: Option<String>,
    /// Full page text, if the provider fetched it.
    #[serde(default)]
    pub body: Option<String>,
}

/// A single ranked result in the current result set.
///
/// # Examples
///
/// ```
/// use requery::document::Document;
///
/// let doc = Document::builder(2, "https://es.wikipedia.org/wiki/Friends")
///     .title("Friends - Wikipedia")
///     .snippet("Friends is an American sitcom")
///     .build();
///
/// assert_eq!(doc.joint_text(), "Friends - Wikipedia Friends is an American sitcom");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    rank: usize,
    url: String,
    title: String,
    snippet: String,
    body: Option<String>,
}

impl Document {
    /// Create a document. Ranks are 1-based; a rank of 0 is floored to 1.
    pub fn new<U, T, S>(rank: usize, url: U, title: T, snippet: S) -> Self
    where
        U: Into<String>,
        T: Into<String>,
        S: Into<String>,
    {
        Document {
            rank: rank.max(1),
            url: url.into(),
            title: title.into(),
            snippet: snippet.into(),
            body: None,
        }
    }

    /// Create a builder for constructing documents.
    pub fn builder<U: Into<String>>(rank: usize, url: U) -> DocumentBuilder {
        DocumentBuilder::new(rank, url)
    }

    /// Convert a raw search result at the given 1-based rank.
    ///
    /// Missing title or snippet become empty strings. Line breaks and
    /// non-breaking spaces are removed from the snippet.
    pub fn from_search_result(result: SearchResult, rank: usize) -> Self {
        let snippet = result
            .snippet
            .map(|s| s.replace(['\n', '\u{a0}'], ""))
            .unwrap_or_default();

        Document {
            rank: rank.max(1),
            url: result.formatted_url,
            title: result.title.unwrap_or_default(),
            snippet,
            body: result.body,
        }
    }

    /// Convert an ordered list of raw results, assigning ranks 1..=n.
    pub fn from_search_results(results: Vec<SearchResult>) -> Vec<Document> {
        results
            .into_iter()
            .enumerate()
            .map(|(i, result)| Self::from_search_result(result, i + 1))
            .collect()
    }

    /// 1-based position in the result list.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Title and snippet (and body, when present) joined by single spaces.
    pub fn joint_text(&self) -> String {
        match &self.body {
            Some(body) => format!("{} {} {}", self.title, self.snippet, body),
            None => format!("{} {}", self.title, self.snippet),
        }
    }
}

/// Builder for [`Document`].
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new builder for a document at the given rank.
    pub fn new<U: Into<String>>(rank: usize, url: U) -> Self {
        DocumentBuilder {
            document: Document::new(rank, url, "", ""),
        }
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.document.title = title.into();
        self
    }

    pub fn snippet<S: Into<String>>(mut self, snippet: S) -> Self {
        self.document.snippet = snippet.into();
        self
    }

    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.document.body = Some(body.into());
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        self.document
    }
}
