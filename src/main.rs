//! # AI News Scraper
//!
//! An HTTP service that scrapes AI coverage from BBC, The Guardian, USA Today and
//! TechCrunch on demand and serves it as JSON.
//!
//! ## Usage
//!
//! ```sh
//! PORT=8000 ai_news_scraper
//! curl localhost:8000/news
//! ```
//!
//! ## Architecture
//!
//! Each request runs the pipeline from scratch; nothing is cached or stored.
//! 1. **Indexing**: fetch a source's listing page and pick relevant article links
//! 2. **Fetching**: download every article page and extract its body text
//! 3. **Aggregation**: for `/news`, run all sources concurrently and merge in a fixed order

use ai_news_scraper::cli::Cli;
use ai_news_scraper::fetcher::Fetcher;
use ai_news_scraper::routes::{AppState, create_router};
use ai_news_scraper::scrapers::Scraper;
use ai_news_scraper::utils::shutdown_signal;
use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let fetcher = Fetcher::new(args.fetch_timeout())?;
    let scraper = Scraper::new(fetcher, args.scrape_options());
    info!(
        sources = scraper.sources().len(),
        timeout_secs = args.fetch_timeout_secs,
        article_concurrency = args.article_concurrency,
        on_article_error = ?args.on_article_error,
        "Scraper ready"
    );

    let app = create_router(AppState {
        scraper: Arc::new(scraper),
    });

    let bind_addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
