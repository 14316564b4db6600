//! News source scrapers.
//!
//! Every source runs through the same two-phase pipeline in [`Scraper::scrape_source`]:
//!
//! 1. **Discovery**: fetch the source's listing page and pick out relevant article links
//! 2. **Fetching**: download each article page and pull the body text out of its
//!    content container
//!
//! What differs between outlets is data, not code: each submodule exports a
//! [`SourceConfig`] describing where to look and what counts as relevant.
//!
//! # Supported Sources
//!
//! | Source | Module | Listing page | Relevance test |
//! |--------|--------|--------------|----------------|
//! | BBC | [`bbc`] | `/innovation/artificial-intelligence` | href has `/news/`, `h2` title, no reels |
//! | Guardian | [`guardian`] | `/technology/artificialintelligenceai` | `aria-label` mentions "ai" |
//! | USA Today | [`usatoday`] | `/tech/` | AI slug in href |
//! | TechCrunch | [`techcrunch`] | `/tag/artificial-intelligence/` | AI slug, no ChatGPT, deduplicated |

pub mod bbc;
pub mod guardian;
pub mod techcrunch;
pub mod usatoday;

use crate::error::ScrapeError;
use crate::extract::{self, LinkPredicate, parse_selector};
use crate::fetcher::Fetcher;
use crate::models::{Article, Source};
use crate::utils::truncate_for_log;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Matches hrefs carrying an `ai` slug token, e.g. `/story/tech/new-ai-chip`.
static AI_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"-ai\b|ai-").unwrap());

/// Whether `href` contains a hyphen-delimited `ai` token.
pub fn has_ai_slug(href: &str) -> bool {
    AI_SLUG.is_match(href)
}

/// Everything the generic pipeline needs to know about one outlet.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub source: Source,
    /// Scheme and host, used to resolve relative hrefs.
    pub origin: String,
    pub listing_path: &'static str,
    /// Candidate anchors on the listing page.
    pub anchor_selector: &'static str,
    /// Relevance test; returns the title of selected anchors.
    pub select_link: LinkPredicate,
    /// Paragraphs inside the article content container.
    pub body_selector: &'static str,
    /// Drop later articles whose url was already seen.
    pub dedup_by_url: bool,
}

impl SourceConfig {
    /// The configurations of every supported source, in combined-feed order.
    pub fn defaults() -> Vec<SourceConfig> {
        vec![
            bbc::config(),
            guardian::config(),
            usatoday::config(),
            techcrunch::config(),
        ]
    }

    pub fn listing_url(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), self.listing_path)
    }

    /// Point the source at another host, keeping every other setting.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

/// What to do when a single article page cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ArticleFailurePolicy {
    /// Fail the whole source.
    #[default]
    Fail,
    /// Keep the article with empty text.
    KeepStub,
    /// Leave the article out.
    Skip,
}

/// Tuning knobs for [`Scraper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Article pages fetched at once per source. Values below 1 are treated as 1.
    pub article_concurrency: usize,
    pub on_article_error: ArticleFailurePolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            article_concurrency: 4,
            on_article_error: ArticleFailurePolicy::Fail,
        }
    }
}

/// Runs source scrapes. Cheap to share behind an `Arc`; holds no per-request state.
#[derive(Debug, Clone)]
pub struct Scraper {
    fetcher: Fetcher,
    sources: Vec<SourceConfig>,
    options: ScrapeOptions,
}

impl Scraper {
    pub fn new(fetcher: Fetcher, options: ScrapeOptions) -> Self {
        Self::with_sources(fetcher, SourceConfig::defaults(), options)
    }

    pub fn with_sources(
        fetcher: Fetcher,
        sources: Vec<SourceConfig>,
        options: ScrapeOptions,
    ) -> Self {
        Self {
            fetcher,
            sources,
            options,
        }
    }

    /// Configured sources, in combined-feed order.
    pub fn sources(&self) -> &[SourceConfig] {
        &self.sources
    }

    pub fn config(&self, source: Source) -> Result<&SourceConfig, ScrapeError> {
        self.sources
            .iter()
            .find(|config| config.source == source)
            .ok_or(ScrapeError::UnknownSource(source))
    }

    /// Scrape one source by name.
    pub async fn scrape(&self, source: Source) -> Result<Vec<Article>, ScrapeError> {
        let config = self.config(source)?;
        self.scrape_source(config).await
    }

    /// Listing page, then every discovered article page.
    ///
    /// Articles come back in discovery order whatever the fetch concurrency.
    #[instrument(level = "info", skip_all, fields(source = %config.source))]
    pub async fn scrape_source(&self, config: &SourceConfig) -> Result<Vec<Article>, ScrapeError> {
        let listing_url = config.listing_url();
        let markup = self.fetch(&listing_url).await?;
        let fetched_at = Utc::now();

        let stubs = discover(&markup, config, fetched_at)?;
        info!(count = stubs.len(), listing = %listing_url, "Indexed article URLs");
        debug!(urls = ?stubs.iter().map(|a| a.url.as_str()).collect::<Vec<_>>(), "Article URLs");

        let articles: Vec<Article> = stream::iter(stubs)
            .map(|stub| self.complete(stub, config.body_selector))
            .buffered(self.options.article_concurrency.max(1))
            .try_collect::<Vec<Option<Article>>>()
            .await?
            .into_iter()
            .flatten()
            .collect();

        info!(count = articles.len(), "Fetched article contents");
        Ok(articles)
    }

    /// Fill in the body of a stub according to the failure policy.
    async fn complete(
        &self,
        mut article: Article,
        body_selector: &'static str,
    ) -> Result<Option<Article>, ScrapeError> {
        let markup = match self.fetch(&article.url).await {
            Ok(markup) => markup,
            Err(e) => {
                return match self.options.on_article_error {
                    ArticleFailurePolicy::Fail => {
                        error!(error = %e, url = %article.url, "Article fetch failed");
                        Err(e)
                    }
                    ArticleFailurePolicy::KeepStub => {
                        warn!(error = %e, url = %article.url, "Article fetch failed; keeping stub");
                        Ok(Some(article))
                    }
                    ArticleFailurePolicy::Skip => {
                        warn!(error = %e, url = %article.url, "Article fetch failed; skipping");
                        Ok(None)
                    }
                };
            }
        };

        article.text = read_body(&markup, body_selector)?;
        debug!(
            url = %article.url,
            bytes = article.text.len(),
            preview = %truncate_for_log(&article.text, 120),
            "Parsed article"
        );
        Ok(Some(article))
    }

    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.fetcher
            .fetch(url)
            .await
            .map_err(|source| ScrapeError::Fetch {
                url: url.to_string(),
                source,
            })
    }
}

/// Turn a listing page into stub articles, in discovery order.
pub fn discover(
    markup: &str,
    config: &SourceConfig,
    fetched_at: DateTime<Utc>,
) -> Result<Vec<Article>, ScrapeError> {
    let origin = Url::parse(&config.origin).map_err(|e| ScrapeError::Fetch {
        url: config.origin.clone(),
        source: e.into(),
    })?;
    let anchors = parse_selector(config.anchor_selector)?;
    let document = Html::parse_document(markup);

    let stubs = extract::links(&document, &anchors, &origin, config.select_link)
        .map(|link| Article::stub(link, config.source, fetched_at));

    Ok(if config.dedup_by_url {
        stubs.unique_by(|article| article.url.clone()).collect()
    } else {
        stubs.collect()
    })
}

fn read_body(markup: &str, body_selector: &'static str) -> Result<String, ScrapeError> {
    let paragraphs = parse_selector(body_selector)?;
    let document = Html::parse_document(markup);
    Ok(extract::body_text(&document, &paragraphs))
}
