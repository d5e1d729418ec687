use super::KvStore;
use crate::error::ProviderError;
use anyhow::Context;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

/// In-process key/value store.
///
/// Values are kept as raw bytes and parsed on every read, the way a remote
/// store would hand them back.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `key` pre-populated from the contents of `path`.
    pub async fn seeded_from_file(key: &str, path: &Path) -> crate::error::Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        tracing::info!(key, path = %path.display(), bytes = bytes.len(), "Seeded key/value store");

        let store = Self::new();
        store.put(key, bytes).await;
        Ok(store)
    }

    pub async fn put(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.into());
    }

    pub async fn remove(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }
}

impl KvStore for MemoryKv {
    fn name(&self) -> &'static str {
        "memory-kv"
    }

    fn get_json<'a>(
        &'a self,
        key: &'a str,
    ) -> BoxFuture<'a, Result<Option<serde_json::Value>, ProviderError>> {
        async move {
            let entries = self.entries.read().await;
            let Some(bytes) = entries.get(key) else {
                return Ok(None);
            };
            serde_json::from_slice(bytes)
                .map(Some)
                .map_err(|source| ProviderError::Json {
                    provider: self.name(),
                    source,
                })
        }
        .boxed()
    }
}
