//! Data models for scraped articles and the sources they come from.
//!
//! - [`Source`]: the fixed set of news outlets this service knows how to scrape
//! - [`Link`]: a relevant (title, absolute URL) pair discovered on a listing page
//! - [`Article`]: the record returned to clients, built as a stub from a [`Link`]
//!   and completed with the article body once its page has been fetched

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A news outlet with a dedicated scraper.
///
/// Serializes to the human-readable outlet name (`"USA Today"`, not `"UsaToday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    #[serde(rename = "BBC")]
    Bbc,
    #[serde(rename = "Guardian")]
    Guardian,
    #[serde(rename = "USA Today")]
    UsaToday,
    #[serde(rename = "TechCrunch")]
    TechCrunch,
}

impl Source {
    /// Every source, in the order the combined feed lists them.
    pub const ALL: [Source; 4] = [
        Source::Bbc,
        Source::Guardian,
        Source::UsaToday,
        Source::TechCrunch,
    ];

    /// Outlet name as it appears in JSON and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Source::Bbc => "BBC",
            Source::Guardian => "Guardian",
            Source::UsaToday => "USA Today",
            Source::TechCrunch => "TechCrunch",
        }
    }

    /// Path segment of the per-source HTTP route.
    pub fn slug(self) -> &'static str {
        match self {
            Source::Bbc => "bbc",
            Source::Guardian => "guardian",
            Source::UsaToday => "usatoday",
            Source::TechCrunch => "techcrunch",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate article link found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub title: String,
    /// Always absolute.
    pub url: String,
}

/// A scraped article.
///
/// Articles start life as stubs (see [`Article::stub`]) holding everything known from
/// the listing page; `text` is filled in after the article page itself is fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Headline taken from the listing page.
    pub title: String,
    /// Absolute URL of the article page.
    pub url: String,
    /// Outlet that produced the article.
    pub source: Source,
    /// When the listing page was fetched. Shared by every article from the same call.
    #[serde(serialize_with = "serialize_instant")]
    pub fetched_at: DateTime<Utc>,
    /// Body paragraphs joined with `\n`; empty when the page had no matching paragraphs.
    pub text: String,
}

impl Article {
    /// Promote a discovered link to an article whose body has not been fetched yet.
    pub fn stub(link: Link, source: Source, fetched_at: DateTime<Utc>) -> Self {
        Self {
            title: link.title,
            url: link.url,
            source,
            fetched_at,
            text: String::new(),
        }
    }

    /// Whether the title contains anything besides whitespace.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
fn serialize_instant<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}
