//! Error types for fetching and scraping.

use thiserror::Error;

/// Failure to retrieve a page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to read body: {0}")]
    Body(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if let Some(status) = err.status() {
            Self::Http { status }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Failure of a source scrape or of the combined feed.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },

    #[error("no scraper configured for {0}")]
    UnknownSource(crate::models::Source),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[test]
    fn test_fetch_error_display_includes_url() {
        let err = ScrapeError::Fetch {
            url: "https://techcrunch.com/tag/artificial-intelligence/".to_string(),
            source: FetchError::Http {
                status: reqwest::StatusCode::BAD_GATEWAY,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("https://techcrunch.com/tag/artificial-intelligence/"));
        assert!(msg.contains("502"));
    }

    #[test]
    fn test_unknown_source_display() {
        let err = ScrapeError::UnknownSource(Source::UsaToday);
        assert_eq!(err.to_string(), "no scraper configured for USA Today");
    }
}
