//! JSON response bodies.

use super::MAX_HEADINGS;
use crate::search::SearchHit;
use serde::Serialize;

/// Body of the service-unavailable response.
pub const INDEX_UNAVAILABLE_MESSAGE: &str = "Search index not available";

#[derive(Debug, Serialize)]
struct ResultsBody<'a> {
    results: Vec<ResultItem<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultItem<'a> {
    path: &'a str,
    title: &'a str,
    headings: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<&'a str>,
    score: u32,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// `{"results": [...]}` for ranked hits. Each item carries at most
/// `MAX_HEADINGS` matched headings.
pub fn render_json(hits: &[SearchHit<'_>]) -> String {
    let body = ResultsBody {
        results: hits
            .iter()
            .map(|hit| ResultItem {
                path: &hit.document.path,
                title: &hit.document.title,
                headings: &hit.matches.headings[..hit.matches.headings.len().min(MAX_HEADINGS)],
                excerpt: hit.excerpt.as_deref(),
                score: hit.score,
            })
            .collect(),
    };
    to_json(&body)
}

/// `{"results": []}`
pub fn render_json_empty() -> String {
    render_json(&[])
}

/// `{"error": "Search index not available"}`
pub fn render_json_error() -> String {
    to_json(&ErrorBody {
        error: INDEX_UNAVAILABLE_MESSAGE,
    })
}

fn to_json(body: &impl Serialize) -> String {
    // Plain structs of strings and integers always serialize.
    serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize response body: {}", e);
        String::from("{}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SearchDocument;
    use crate::search::Matches;
    use assert2::check;
    use serde_json::{Value, json};

    fn document() -> SearchDocument {
        SearchDocument {
            path: "/guide".to_string(),
            title: "Guide".to_string(),
            body: "body".to_string(),
            headings: vec![],
            auth: None,
        }
    }

    #[test]
    fn empty_results() {
        check!(render_json_empty() == r#"{"results":[]}"#);
    }

    #[test]
    fn error_body() {
        check!(render_json_error() == r#"{"error":"Search index not available"}"#);
    }

    #[test]
    fn result_fields_and_heading_cap() {
        let doc = document();
        let hit = SearchHit {
            document: &doc,
            score: 26,
            matches: Matches {
                title: true,
                body: true,
                headings: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            },
            excerpt: Some("...around the match...".to_string()),
        };

        let value: Value = serde_json::from_str(&render_json(&[hit])).unwrap();
        check!(
            value
                == json!({
                    "results": [{
                        "path": "/guide",
                        "title": "Guide",
                        "headings": ["A", "B", "C"],
                        "excerpt": "...around the match...",
                        "score": 26
                    }]
                })
        );
    }

    #[test]
    fn missing_excerpt_is_omitted() {
        let doc = document();
        let hit = SearchHit {
            document: &doc,
            score: 10,
            matches: Matches::default(),
            excerpt: None,
        };

        let value: Value = serde_json::from_str(&render_json(&[hit])).unwrap();
        check!(value["results"][0].get("excerpt").is_none());
        check!(value["results"][0]["headings"] == json!([]));
    }
}
