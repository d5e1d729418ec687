pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod provider;
pub mod search;
pub mod server;
pub mod tracing;

pub use config::Config;
pub use index::{SearchDocument, SearchIndex};
pub use search::{IndexLoader, SearchRequest, SearchResponse, SearchService, search};
