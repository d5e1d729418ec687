//! HTTP surface: a single `GET /search` route over [`SearchService`].

use crate::error::Result;
use crate::format::HX_REQUEST_HEADER;
use crate::search::{SearchRequest, SearchResponse, SearchService};
use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
struct AppState {
    service: Arc<SearchService>,
    request_timeout: Duration,
}

/// Build the router. Loads taking longer than `request_timeout` are cancelled
/// and answered with 503.
pub fn router(service: Arc<SearchService>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(AppState {
            service,
            request_timeout,
        })
}

/// Serve `router` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> SearchResponse {
    let request = SearchRequest {
        query: first_param(params, "q"),
        hx_request: header_str(&headers, HX_REQUEST_HEADER),
        accept: header_str(&headers, header::ACCEPT.as_str()),
    };

    // Cancels any in-flight load if the client goes away.
    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();

    let response = tokio::select! {
        response = state.service.handle(&request, &cancel) => response,
        () = tokio::time::sleep(state.request_timeout) => {
            cancel.cancel();
            tracing::warn!(timeout = ?state.request_timeout, "Search timed out loading the index");
            SearchResponse::unavailable()
        }
    };

    guard.disarm();
    response
}

/// First value of `name`; later repeats are ignored.
fn first_param(params: Vec<(String, String)>, name: &str) -> Option<String> {
    params
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        if let Some(vary) = self.vary {
            headers.insert(header::VARY, HeaderValue::from_static(vary));
        }
        if let Some(cache_control) = self.cache_control {
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(cache_control));
        }
        response
    }
}
