use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docsite-search")]
#[command(about = "Full-text search endpoint for a static documentation site", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve `GET /search` over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Run a single query and print the response body
    Query {
        query: String,
        /// Render the HTML fragment instead of JSON
        #[arg(long)]
        html: bool,
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Flags shared by every subcommand. They override the config file.
#[derive(Debug, Default, Args)]
pub struct SourceArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Index JSON to seed the key/value store with
    #[arg(long)]
    pub index_file: Option<PathBuf>,
    /// Directory the built site is served from
    #[arg(long, conflicts_with = "assets_url")]
    pub assets_dir: Option<PathBuf>,
    /// Base URL the built site is served from
    #[arg(long)]
    pub assets_url: Option<String>,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.index_file {
            config.kv.seed_file = Some(path.clone());
        }
        if let Some(dir) = &self.assets_dir {
            config.assets.dir = Some(dir.clone());
            config.assets.url = None;
        }
        if let Some(url) = &self.assets_url {
            config.assets.url = Some(url.clone());
            config.assets.dir = None;
        }
    }
}
