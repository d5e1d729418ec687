//! Request dispatch for the search endpoint.
//!
//! A request either carries a usable query or it does not. Blank queries are
//! answered immediately without touching the index; everything else loads the
//! index, runs the search pipeline and renders in the negotiated format.

use super::loader::IndexLoader;
use crate::format::{
    HX_REQUEST_HEADER, HtmlOptions, OutputFormat, render_html, render_html_empty, render_json,
    render_json_empty, render_json_error,
};
use axum::http::StatusCode;
use tokio_util::sync::CancellationToken;

/// Cache directive attached to rendered search results.
pub const CACHE_CONTROL: &str = "private, max-age=60";

/// Transport-independent view of an incoming search request.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Raw `q` parameter
    pub query: Option<String>,
    /// Value of the `HX-Request` header
    pub hx_request: Option<String>,
    /// Value of the `Accept` header
    pub accept: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Mark the request as issued by htmx.
    pub fn htmx(mut self) -> Self {
        self.hx_request = Some("true".to_string());
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::negotiate(self.hx_request.as_deref(), self.accept.as_deref())
    }

    /// The trimmed query, or `None` when it is absent or blank.
    pub fn trimmed_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// Rendered response, ready to be written by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    /// Header name the response varies on
    pub vary: Option<&'static str>,
    pub cache_control: Option<&'static str>,
    pub body: String,
}

impl SearchResponse {
    fn ok(format: OutputFormat, body: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: format.content_type(),
            vary: (format == OutputFormat::Html).then_some(HX_REQUEST_HEADER),
            cache_control: None,
            body,
        }
    }

    fn cached(mut self) -> Self {
        self.cache_control = Some(CACHE_CONTROL);
        self
    }

    /// 503 with a JSON body, whatever format was negotiated.
    pub fn unavailable() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            content_type: OutputFormat::Json.content_type(),
            vary: None,
            cache_control: None,
            body: render_json_error(),
        }
    }
}

/// The search endpoint: index loading, search and rendering.
#[derive(Debug, Clone)]
pub struct SearchService {
    loader: IndexLoader,
    html: HtmlOptions,
}

impl SearchService {
    pub fn new(loader: IndexLoader) -> Self {
        Self::with_html_options(loader, HtmlOptions::default())
    }

    pub fn with_html_options(loader: IndexLoader, html: HtmlOptions) -> Self {
        Self { loader, html }
    }

    /// Answer one search request.
    ///
    /// `cancel` is handed to the index loader; a cancelled load is reported
    /// like any other unavailable index.
    pub async fn handle(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> SearchResponse {
        let format = request.format();

        let Some(query) = request.trimmed_query() else {
            tracing::debug!(?format, "Empty search query");
            let body = match format {
                OutputFormat::Json => render_json_empty(),
                OutputFormat::Html => render_html_empty(),
            };
            return SearchResponse::ok(format, body);
        };

        let index = match self.loader.load(cancel).await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(error = %e, query, "Search index not available");
                return SearchResponse::unavailable();
            }
        };

        let hits = super::search(&index, query);
        tracing::debug!(query, ?format, results = hits.len(), "Search complete");

        let body = match format {
            OutputFormat::Json => render_json(&hits),
            OutputFormat::Html => render_html(&hits, query, &self.html),
        };
        SearchResponse::ok(format, body).cached()
    }
}
