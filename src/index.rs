//! Search index data model.
//!
//! The index is produced by the site build and consumed read-only here. Every
//! type mirrors the `search-index.json` shape; optional parts of a document are
//! tolerated so that older or partial builds still decode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Key under which the index is stored in the key/value provider.
pub const INDEX_KEY: &str = "search-index";

/// Well-known path of the index in the blob provider.
pub const INDEX_PATH: &str = "search-index.json";

/// The full search index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Index format version
    pub version: String,

    /// Build timestamp as written by the generator
    pub generated_at: String,

    /// Generator settings recorded alongside the documents
    pub config: IndexConfig,

    /// Indexed documents; order is the tie-break order for equal scores
    pub documents: Vec<SearchDocument>,
}

/// Settings the index was generated with.
///
/// `max_excerpt_length` and `include_auth` are recorded but do not change how
/// search behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub heading_split_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_excerpt_length: Option<u32>,
    #[serde(default)]
    pub include_auth: bool,
}

/// A searchable page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Page path, unique within an index and used as the link target
    pub path: String,

    /// Page title
    pub title: String,

    /// Plain text content
    pub body: String,

    /// Headings in document order
    #[serde(default)]
    pub headings: Vec<Heading>,

    /// Access metadata. Carried through untouched; search does not filter on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<DocumentAuth>,
}

/// A heading inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,
    pub text: String,
    /// Fragment appended to the document path, e.g. `#installation`
    pub anchor: String,
}

/// Access-control metadata attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authn: Option<String>,
    #[serde(default)]
    pub authz: BTreeSet<String>,
}

impl SearchIndex {
    /// Decode an index from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Decode an index from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl SearchDocument {
    /// Anchor of the first heading whose text equals `text`.
    pub fn anchor_for(&self, text: &str) -> Option<&str> {
        self.headings
            .iter()
            .find(|h| h.text == text)
            .map(|h| h.anchor.as_str())
    }
}
