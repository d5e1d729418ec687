//! Query processing over the documentation search index.
//!
//! A query runs through a fixed pipeline: tokenize, score every document,
//! rank, then cut excerpts for the survivors. [`service`] wraps the pipeline
//! with index loading and response rendering.

// Module declarations
pub(crate) mod excerpt;
pub(crate) mod loader;
pub(crate) mod rank;
pub(crate) mod scoring;
pub(crate) mod service;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use excerpt::{EXCERPT_AFTER, EXCERPT_BEFORE, excerpt};
pub use loader::{BlobSource, IndexLoader, IndexSource, KvSource};
pub use rank::{MAX_RESULTS, rank};
pub use scoring::{BODY_WEIGHT, HEADING_WEIGHT, Matches, SearchHit, TITLE_WEIGHT, score_index};
pub use service::{CACHE_CONTROL, SearchRequest, SearchResponse, SearchService};
pub use tokenize::{FoldedText, query_terms};

use crate::index::SearchIndex;

/// Run `query` against `index` and return the ranked, excerpted hits.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<SearchHit<'a>> {
    let terms = query_terms(query);
    let mut hits = rank(score_index(index, &terms));

    for hit in hits.iter_mut().filter(|h| h.matches.body) {
        let document = hit.document;
        hit.excerpt = excerpt(&document.body, &FoldedText::new(&document.body), &terms);
    }
    hits
}
