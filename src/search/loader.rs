//! Index resolution over an ordered chain of sources.
//!
//! Sources are tried in order. A source that has no index passes to the next
//! one; a source that faults ends the load. The caller's cancellation token is
//! checked around every source read.

use crate::error::LoadError;
use crate::index::{INDEX_KEY, INDEX_PATH, SearchIndex};
use crate::provider::{BlobStore, KvStore};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// One place the index may live.
pub trait IndexSource: Send + Sync {
    /// Human readable label for logs and errors.
    fn label(&self) -> String;

    /// `Ok(None)` when the source does not have an index.
    fn load(&self) -> BoxFuture<'_, Result<Option<SearchIndex>, LoadError>>;
}

/// Reads the index as JSON from a key/value store.
pub struct KvSource {
    store: Arc<dyn KvStore>,
    key: String,
}

impl KvSource {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key(store, INDEX_KEY)
    }

    pub fn with_key(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl IndexSource for KvSource {
    fn label(&self) -> String {
        format!("{}:{}", self.store.name(), self.key)
    }

    fn load(&self) -> BoxFuture<'_, Result<Option<SearchIndex>, LoadError>> {
        async move {
            let value = self
                .store
                .get_json(&self.key)
                .await
                .map_err(|source| LoadError::Provider {
                    source_name: self.label(),
                    source,
                })?;
            let Some(value) = value else {
                return Ok(None);
            };
            SearchIndex::from_value(value)
                .map(Some)
                .map_err(|source| LoadError::Malformed {
                    source_name: self.label(),
                    source,
                })
        }
        .boxed()
    }
}

/// Fetches the index file from a blob store.
pub struct BlobSource {
    store: Arc<dyn BlobStore>,
    path: String,
}

impl BlobSource {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self::with_path(store, INDEX_PATH)
    }

    pub fn with_path(store: Arc<dyn BlobStore>, path: impl Into<String>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }
}

impl IndexSource for BlobSource {
    fn label(&self) -> String {
        format!("{}:{}", self.store.name(), self.path)
    }

    fn load(&self) -> BoxFuture<'_, Result<Option<SearchIndex>, LoadError>> {
        async move {
            let blob = self
                .store
                .fetch(&self.path)
                .await
                .map_err(|source| LoadError::Provider {
                    source_name: self.label(),
                    source,
                })?;
            if !blob.is_success() {
                tracing::debug!(
                    source = %self.label(),
                    status = blob.status,
                    "Index fetch was not successful"
                );
                return Ok(None);
            }
            SearchIndex::from_slice(&blob.body)
                .map(Some)
                .map_err(|source| LoadError::Malformed {
                    source_name: self.label(),
                    source,
                })
        }
        .boxed()
    }
}

/// Resolves the current search index.
#[derive(Clone, Default)]
pub struct IndexLoader {
    sources: Vec<Arc<dyn IndexSource>>,
}

impl fmt::Debug for IndexLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexLoader")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.label()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl IndexLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chain: key/value store first, then the blob store.
    pub fn from_providers(kv: Option<Arc<dyn KvStore>>, blob: Option<Arc<dyn BlobStore>>) -> Self {
        let mut loader = Self::new();
        if let Some(kv) = kv {
            loader = loader.with_source(KvSource::new(kv));
        }
        if let Some(blob) = blob {
            loader = loader.with_source(BlobSource::new(blob));
        }
        loader
    }

    /// Append a source to the end of the chain.
    pub fn with_source(mut self, source: impl IndexSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Load the index from the first source that has one.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<SearchIndex, LoadError> {
        for source in &self.sources {
            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::debug!(source = %source.label(), "Index load cancelled");
                    return Err(LoadError::Cancelled);
                }
                result = source.load() => result,
            };

            match result {
                Ok(Some(index)) => {
                    tracing::debug!(
                        source = %source.label(),
                        documents = index.documents.len(),
                        "Loaded search index"
                    );
                    return Ok(index);
                }
                Ok(None) => {
                    tracing::debug!(source = %source.label(), "Search index not present");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Search index source failed");
                    return Err(e);
                }
            }
        }

        Err(LoadError::Missing)
    }
}
