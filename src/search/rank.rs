//! Result ordering and truncation.

use super::scoring::SearchHit;

/// Maximum number of results returned for a query.
pub const MAX_RESULTS: usize = 20;

/// Order hits by score, highest first, and keep the top `MAX_RESULTS`.
///
/// `sort_by` is stable: hits with equal scores stay in index order.
pub fn rank(mut hits: Vec<SearchHit<'_>>) -> Vec<SearchHit<'_>> {
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(MAX_RESULTS);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SearchDocument;
    use crate::search::scoring::Matches;
    use assert2::check;

    fn docs(n: usize) -> Vec<SearchDocument> {
        (0..n)
            .map(|i| SearchDocument {
                path: format!("/doc-{i}"),
                title: format!("Doc {i}"),
                body: String::new(),
                headings: vec![],
                auth: None,
            })
            .collect()
    }

    fn hits<'a>(documents: &'a [SearchDocument], scores: &[u32]) -> Vec<SearchHit<'a>> {
        documents
            .iter()
            .zip(scores)
            .map(|(document, &score)| SearchHit {
                document,
                score,
                matches: Matches::default(),
                excerpt: None,
            })
            .collect()
    }

    fn paths(hits: &[SearchHit<'_>]) -> Vec<String> {
        hits.iter().map(|h| h.document.path.clone()).collect()
    }

    #[test]
    fn sorts_by_score_descending() {
        let documents = docs(3);
        let ranked = rank(hits(&documents, &[1, 10, 5]));
        check!(paths(&ranked) == vec!["/doc-1", "/doc-2", "/doc-0"]);
    }

    #[test]
    fn equal_scores_keep_index_order() {
        let documents = docs(6);
        let ranked = rank(hits(&documents, &[5, 10, 5, 10, 5, 1]));
        check!(
            paths(&ranked) == vec!["/doc-1", "/doc-3", "/doc-0", "/doc-2", "/doc-4", "/doc-5"]
        );
    }

    #[test]
    fn truncates_to_max_results() {
        let documents = docs(30);
        let scores: Vec<u32> = (0..30).map(|i| if i >= 25 { 50 } else { 1 }).collect();
        let ranked = rank(hits(&documents, &scores));

        check!(ranked.len() == MAX_RESULTS);
        check!(ranked[0].document.path == "/doc-25");
        check!(ranked[5].document.path == "/doc-0");
        check!(ranked[19].document.path == "/doc-14");
    }
}
