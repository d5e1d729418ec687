//! Weighted relevance scoring.
//!
//! Each query term contributes once per field it appears in:
//! - 10: the title contains the term
//! - 5: a heading contains the term (per matching heading)
//! - 1: the body contains the term
//!
//! Containment is substring based on case-folded text, so `cat` matches
//! `concatenate`. How often a term occurs inside a field does not matter; a
//! term repeated in the query is scored again.

use super::tokenize::fold_case;
use crate::index::{SearchDocument, SearchIndex};

pub const TITLE_WEIGHT: u32 = 10;
pub const HEADING_WEIGHT: u32 = 5;
pub const BODY_WEIGHT: u32 = 1;

/// Which parts of a document matched the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    pub title: bool,
    pub body: bool,
    /// Original-case heading texts, deduplicated, in first-match order
    pub headings: Vec<String>,
}

/// A document that scored above zero.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub document: &'a SearchDocument,
    pub score: u32,
    pub matches: Matches,
    pub excerpt: Option<String>,
}

/// Score every document in `index` against `terms`, keeping index order.
///
/// Documents that match nothing are left out. Excerpts are not filled in here.
pub fn score_index<'a>(index: &'a SearchIndex, terms: &[String]) -> Vec<SearchHit<'a>> {
    if terms.is_empty() {
        return Vec::new();
    }

    index
        .documents
        .iter()
        .filter_map(|document| {
            let (score, matches) = score_document(document, terms);
            (score > 0).then_some(SearchHit {
                document,
                score,
                matches,
                excerpt: None,
            })
        })
        .collect()
}

/// Score one document against folded `terms`.
pub(crate) fn score_document(document: &SearchDocument, terms: &[String]) -> (u32, Matches) {
    let title = fold_case(&document.title);
    let body = fold_case(&document.body);
    let headings: Vec<String> = document
        .headings
        .iter()
        .map(|h| fold_case(&h.text))
        .collect();

    let mut score = 0;
    let mut matches = Matches::default();

    for term in terms {
        if title.contains(term.as_str()) {
            add_weight(&mut score, TITLE_WEIGHT);
            matches.title = true;
        }

        for (heading, folded) in document.headings.iter().zip(&headings) {
            if folded.contains(term.as_str()) {
                add_weight(&mut score, HEADING_WEIGHT);
                if !matches.headings.contains(&heading.text) {
                    matches.headings.push(heading.text.clone());
                }
            }
        }

        if body.contains(term.as_str()) {
            add_weight(&mut score, BODY_WEIGHT);
            matches.body = true;
        }
    }

    (score, matches)
}

/// Scores saturate instead of wrapping on absurdly long queries.
fn add_weight(score: &mut u32, weight: u32) {
    *score = score.saturating_add(weight);
}
