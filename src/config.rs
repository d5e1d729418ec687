//! Server configuration.
//!
//! Configuration comes from an optional TOML file; command line flags are
//! applied on top by the binary. Every key has a default so an empty file (or
//! no file at all) is valid.

use crate::error::Result;
use crate::format::HtmlOptions;
use crate::index::INDEX_KEY;
use crate::provider::{AssetDir, BlobStore, HttpAssets, KvStore, MemoryKv};
use crate::search::{IndexLoader, SearchService};
use crate::tracing::LogFormat;
use anyhow::{Context, bail};
use reqwest::Url;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Name of the directory under the user config dir holding `config.toml`.
const CONFIG_DIR_NAME: &str = "docsite-search";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Deadline for loading the index within one request
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    /// Region result links swap into
    pub hx_target: String,
    pub kv: KvConfig,
    pub assets: AssetsConfig,
}

/// Primary index source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KvConfig {
    /// JSON file loaded into the in-memory store under `search-index`
    pub seed_file: Option<PathBuf>,
}

/// Fallback index source. At most one of `dir` and `url` may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub dir: Option<PathBuf>,
    pub url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8787)),
            request_timeout_secs: 10,
            log_format: LogFormat::default(),
            hx_target: HtmlOptions::default().hx_target,
            kv: KvConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the per-user config file is
    /// used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// `$XDG_CONFIG_HOME/docsite-search/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        if self.assets.dir.is_some() && self.assets.url.is_some() {
            bail!("assets.dir and assets.url are mutually exclusive");
        }
        if let Some(url) = &self.assets.url {
            parse_base_url(url)?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            hx_target: self.hx_target.clone(),
        }
    }

    /// Build the provider chain and the search service it feeds.
    pub async fn build_service(&self) -> Result<SearchService> {
        let kv: Option<Arc<dyn KvStore>> = match &self.kv.seed_file {
            Some(path) => Some(Arc::new(MemoryKv::seeded_from_file(INDEX_KEY, path).await?)),
            None => None,
        };

        let blob: Option<Arc<dyn BlobStore>> = match (&self.assets.dir, &self.assets.url) {
            (Some(dir), _) => Some(Arc::new(AssetDir::new(dir))),
            (None, Some(url)) => Some(Arc::new(HttpAssets::new(parse_base_url(url)?))),
            (None, None) => None,
        };

        let loader = IndexLoader::from_providers(kv, blob);
        if loader.source_count() == 0 {
            tracing::warn!(
                "No index source configured; every search will report the index as unavailable"
            );
        } else {
            tracing::info!(?loader, "Configured index sources");
        }

        Ok(SearchService::with_html_options(loader, self.html_options()))
    }
}

/// Parse a site root URL, making sure it ends in `/` so relative joins keep
/// the last path segment.
fn parse_base_url(url: &str) -> Result<Url> {
    let normalized = if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    };
    Url::parse(&normalized).with_context(|| format!("Invalid assets.url {url:?}"))
}
