//! The combined feed across every configured source.

use crate::error::ScrapeError;
use crate::models::Article;
use crate::scrapers::Scraper;
use futures::future::try_join_all;
use tracing::{info, instrument};

/// Scrape every source concurrently and merge the results.
///
/// Sources keep their configured order (BBC, Guardian, USA Today, TechCrunch) in the
/// output. The first source to fail fails the whole feed; nothing partial is returned.
#[instrument(level = "info", skip_all)]
pub async fn scrape_all(scraper: &Scraper) -> Result<Vec<Article>, ScrapeError> {
    let per_source = try_join_all(
        scraper
            .sources()
            .iter()
            .map(|config| scraper.scrape_source(config)),
    )
    .await?;

    let articles = retain_titled(per_source.into_iter().flatten().collect());
    info!(count = articles.len(), "Merged articles from all sources");
    Ok(articles)
}

/// Drop articles whose title is empty or whitespace.
pub fn retain_titled(mut articles: Vec<Article>) -> Vec<Article> {
    articles.retain(Article::has_title);
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::Fetcher;
    use crate::models::{Link, Source};
    use crate::scrapers::{ScrapeOptions, SourceConfig};
    use chrono::Utc;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn serve(server: &MockServer, at: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("<html><body>{body}</body></html>"))
                    .insert_header("Content-Type", "text/html"),
            )
            .mount(server)
            .await;
    }

    /// All four outlets served from one mock host.
    async fn mock_sources(server: &MockServer, guardian_up: bool) {
        serve(
            server,
            "/innovation/artificial-intelligence",
            r#"<a href="/news/articles/abc"><h2>AI breakthrough</h2></a>"#,
        )
        .await;
        serve(
            server,
            "/news/articles/abc",
            r#"<div data-component="text-block"><p>BBC body</p></div>"#,
        )
        .await;

        if guardian_up {
            serve(
                server,
                "/technology/artificialintelligenceai",
                r#"<a href="/technology/ai-rules" aria-label="New AI rules">New AI rules</a>"#,
            )
            .await;
            serve(
                server,
                "/technology/ai-rules",
                r#"<div class="article-body-commercial-selector"><p>Guardian body</p></div>"#,
            )
            .await;
        } else {
            Mock::given(method("GET"))
                .and(path("/technology/artificialintelligenceai"))
                .respond_with(ResponseTemplate::new(500))
                .mount(server)
                .await;
        }

        serve(
            server,
            "/tech/",
            r#"<a href="/story/tech/new-ai-chip">New AI chip</a>"#,
        )
        .await;
        serve(
            server,
            "/story/tech/new-ai-chip",
            r#"<div class="gnt_ar_b"><p>USA Today body</p></div>"#,
        )
        .await;

        serve(
            server,
            "/tag/artificial-intelligence/",
            r#"<a href="/2024/05/01/ai-agents/">AI agents</a>"#,
        )
        .await;
        serve(
            server,
            "/2024/05/01/ai-agents/",
            r#"<div class="entry-content"><p>TechCrunch body</p></div>"#,
        )
        .await;
    }

    fn scraper_for(server: &MockServer) -> Scraper {
        let sources = SourceConfig::defaults()
            .into_iter()
            .map(|config| config.with_origin(server.uri()))
            .collect();
        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();
        Scraper::with_sources(fetcher, sources, ScrapeOptions::default())
    }

    #[tokio::test]
    async fn test_scrape_all_merges_in_source_order() {
        let server = MockServer::start().await;
        mock_sources(&server, true).await;

        let articles = scrape_all(&scraper_for(&server)).await.unwrap();

        let sources: Vec<Source> = articles.iter().map(|a| a.source).collect();
        assert_eq!(sources, Source::ALL);

        let texts: Vec<&str> = articles.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(
            texts,
            ["BBC body", "Guardian body", "USA Today body", "TechCrunch body"]
        );
        assert!(articles.iter().all(|a| a.url.starts_with("http")));
    }

    #[tokio::test]
    async fn test_one_failing_source_fails_the_feed() {
        let server = MockServer::start().await;
        mock_sources(&server, false).await;

        let result = scrape_all(&scraper_for(&server)).await;

        match result {
            Err(ScrapeError::Fetch { url, .. }) => {
                assert!(url.ends_with("/technology/artificialintelligenceai"))
            }
            other => panic!("Expected the Guardian failure, got {other:?}"),
        }
    }

    #[test]
    fn test_retain_titled_drops_blank_titles() {
        let at = Utc::now();
        let article = |title: &str| {
            Article::stub(
                Link {
                    title: title.to_string(),
                    url: "https://www.theguardian.com/x".to_string(),
                },
                Source::Guardian,
                at,
            )
        };

        let kept = retain_titled(vec![article("AI"), article(""), article("  \t"), article(" x ")]);
        let titles: Vec<&str> = kept.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["AI", " x "]);
    }
}
