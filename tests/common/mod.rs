//! Shared fixtures and substitute providers for integration tests.
//!
//! The substitutes record how often they were called so tests can assert on
//! the shape of the fallback chain, not only on its result.

#![allow(dead_code)] // Helpers used across different integration test crates

use docsite_search::error::ProviderError;
use docsite_search::provider::{Blob, BlobStore, KvStore};
use futures::future::BoxFuture;
use rstest::fixture;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[fixture]
pub fn site_index() -> Value {
    sample_site()
}

/// A small site: an intro page, a guide with headings and a reference page.
pub fn sample_site() -> Value {
    index_with(vec![
        json!({
            "path": "/intro",
            "title": "Getting Started",
            "body": "This guide will concatenate examples.",
            "headings": []
        }),
        json!({
            "path": "/guide/config",
            "title": "Configuration Guide",
            "body": "Set the bind address and the request timeout in config.toml.",
            "headings": [
                {"level": 2, "text": "Bind Address", "anchor": "#bind-address"},
                {"level": 2, "text": "Timeouts", "anchor": "#timeouts"}
            ]
        }),
        json!({
            "path": "/reference/api",
            "title": "API Reference",
            "body": "Every endpoint accepts a timeout parameter.",
            "headings": [{"level": 2, "text": "Search", "anchor": "#search"}],
            "auth": {"authn": "required", "authz": ["staff"]}
        }),
    ])
}

/// Wrap `documents` in a complete index.
pub fn index_with(documents: Vec<Value>) -> Value {
    json!({
        "version": "1.0.0",
        "generated_at": "2026-10-01T12:00:00Z",
        "config": {"heading_split_level": 2, "max_excerpt_length": 150, "include_auth": false},
        "documents": documents
    })
}

/// Key/value substitute answering every read with the same outcome.
pub struct StubKv {
    outcome: KvOutcome,
    calls: AtomicUsize,
}

enum KvOutcome {
    Value(Value),
    Absent,
    Fault,
}

impl StubKv {
    pub fn with_value(value: Value) -> Arc<Self> {
        Self::build(KvOutcome::Value(value))
    }

    pub fn absent() -> Arc<Self> {
        Self::build(KvOutcome::Absent)
    }

    pub fn faulty() -> Arc<Self> {
        Self::build(KvOutcome::Fault)
    }

    fn build(outcome: KvOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl KvStore for StubKv {
    fn name(&self) -> &'static str {
        "stub-kv"
    }

    fn get_json<'a>(
        &'a self,
        _key: &'a str,
    ) -> BoxFuture<'a, Result<Option<Value>, ProviderError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = match &self.outcome {
            KvOutcome::Value(value) => Ok(Some(value.clone())),
            KvOutcome::Absent => Ok(None),
            KvOutcome::Fault => Err(ProviderError::Io {
                provider: "stub-kv",
                message: "connection reset".to_string(),
            }),
        };
        Box::pin(async move { result })
    }
}

/// Blob substitute returning a fixed response, or never answering at all.
pub struct StubBlob {
    response: Option<Blob>,
    calls: AtomicUsize,
}

impl StubBlob {
    pub fn with_json(value: &Value) -> Arc<Self> {
        Self::build(Some(Blob::ok(value.to_string().into_bytes())))
    }

    pub fn with_status(status: u16) -> Arc<Self> {
        Self::build(Some(Blob {
            status,
            body: Vec::new(),
        }))
    }

    /// A provider whose fetch stays pending forever.
    pub fn hanging() -> Arc<Self> {
        Self::build(None)
    }

    fn build(response: Option<Blob>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BlobStore for StubBlob {
    fn name(&self) -> &'static str {
        "stub-blob"
    }

    fn fetch<'a>(&'a self, _path: &'a str) -> BoxFuture<'a, Result<Blob, ProviderError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            match &self.response {
                Some(blob) => Ok(blob.clone()),
                None => std::future::pending().await,
            }
        })
    }
}
