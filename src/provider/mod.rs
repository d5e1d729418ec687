//! Upstream storage providers the index is read from.
//!
//! Providers are passed into the search service explicitly so the search logic
//! can be exercised against substitutes. Both traits return boxed futures to
//! stay object safe behind `Arc<dyn ...>`.

mod assets;
mod memory;

pub use assets::{AssetDir, HttpAssets};
pub use memory::MemoryKv;

use crate::error::ProviderError;
use futures::future::BoxFuture;

/// Key/value store holding JSON documents.
pub trait KvStore: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Read `key` and parse it as JSON. `Ok(None)` when the key is absent.
    fn get_json<'a>(
        &'a self,
        key: &'a str,
    ) -> BoxFuture<'a, Result<Option<serde_json::Value>, ProviderError>>;
}

/// Response from a blob fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// HTTP-style status code
    pub status: u16,
    pub body: Vec<u8>,
}

impl Blob {
    pub fn ok(body: Vec<u8>) -> Self {
        Self { status: 200, body }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Static asset store addressed by relative path.
pub trait BlobStore: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetch the asset at `path`. Non-success statuses are returned as values;
    /// only transport failures are errors.
    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Blob, ProviderError>>;
}
