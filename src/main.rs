use anyhow::{Context, bail};
use clap::Parser;
use docsite_search::cli::{Cli, Commands, SourceArgs};
use docsite_search::config::Config;
use docsite_search::search::SearchRequest;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { source, bind } => {
            let mut config = load_config(&source)?;
            if let Some(bind) = bind {
                config.bind = bind;
            }
            let service = config.build_service().await?;

            tracing::info!("Starting docsite-search {}", env!("CARGO_PKG_VERSION"));
            let listener = tokio::net::TcpListener::bind(config.bind)
                .await
                .with_context(|| format!("Failed to bind {}", config.bind))?;
            let router =
                docsite_search::server::router(Arc::new(service), config.request_timeout());
            docsite_search::server::serve(listener, router)
                .await
                .inspect_err(|e| tracing::error!("Server error: {:?}", e))?;
        }
        Commands::Query { query, html, source } => {
            let config = load_config(&source)?;
            let service = config.build_service().await?;

            let mut request = SearchRequest::new(query);
            if html {
                request = request.htmx();
            }
            let response = service.handle(&request, &CancellationToken::new()).await;
            println!("{}", response.body);

            if !response.status.is_success() {
                bail!("search failed with status {}", response.status);
            }
        }
    }

    Ok(())
}

fn load_config(source: &SourceArgs) -> anyhow::Result<Config> {
    let mut config = Config::load(source.config.as_deref())?;
    source.apply(&mut config);
    docsite_search::tracing::init(config.log_format);
    config.validate()?;
    Ok(config)
}
