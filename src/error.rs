//! Error handling types and utilities.

/// A specialized Result type for startup and CLI paths.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the call sites. The search path itself uses the typed
/// errors below so that every failure can be mapped to a response.
pub type Result<T> = anyhow::Result<T>;

/// Failure reported by an upstream storage provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached or the read failed midway.
    #[error("{provider} I/O failed: {message}")]
    Io {
        provider: &'static str,
        message: String,
    },
    /// The provider returned bytes that are not JSON.
    #[error("{provider} returned invalid JSON: {source}")]
    Json {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ProviderError {
    pub(crate) fn io(provider: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Io {
            provider,
            message: err.to_string(),
        }
    }
}

/// Error returned when the search index cannot be resolved.
///
/// Every variant surfaces to clients as the same "index not available"
/// response; the distinction only matters for logs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No source in the chain had an index.
    #[error("no index source had a search index")]
    Missing,
    /// A source returned a payload that does not decode as a search index.
    #[error("search index from {source_name} is malformed: {source}")]
    Malformed {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    /// A source faulted while reading.
    #[error("search index source {source_name} failed: {source}")]
    Provider {
        source_name: String,
        #[source]
        source: ProviderError,
    },
    /// The request was abandoned before the index was read.
    #[error("search index load was cancelled")]
    Cancelled,
}
