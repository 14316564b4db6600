//! Command-line interface definitions.
//!
//! Every option can be given as a flag or through an environment variable, so the
//! server runs unchanged on platforms that only hand over a `PORT`.

use crate::scrapers::{ArticleFailurePolicy, ScrapeOptions};
use clap::Parser;
use std::time::Duration;

/// Serve AI headlines scraped from BBC, The Guardian, USA Today and TechCrunch.
///
/// # Examples
///
/// ```sh
/// # Listen on the default port 8000
/// ai_news_scraper
///
/// # Keep articles whose page failed to load instead of failing the source
/// PORT=3000 ai_news_scraper --on-article-error keep-stub
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Seconds before a single page fetch is abandoned
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Article pages fetched at once per source
    #[arg(long, env = "ARTICLE_CONCURRENCY", default_value_t = 4)]
    pub article_concurrency: usize,

    /// What to do when one article page fails to load
    #[arg(long, env = "ON_ARTICLE_ERROR", value_enum, default_value_t = ArticleFailurePolicy::Fail)]
    pub on_article_error: ArticleFailurePolicy,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            article_concurrency: self.article_concurrency,
            on_article_error: self.on_article_error,
        }
    }
}
