//! Link and body extraction over parsed documents.
//!
//! Everything here is synchronous and network-free. Callers parse markup with
//! [`Html::parse_document`], run the extractors, and drop the document before the
//! next `.await`: `scraper::Html` is not `Send`.

use crate::error::ScrapeError;
use crate::models::Link;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());

/// Decides whether an anchor is relevant and, if so, which title it carries.
pub type LinkPredicate = fn(&Anchor<'_>) -> Option<String>;

/// Parse a CSS selector, keeping the offending pattern in the error.
pub fn parse_selector(selector: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector,
        reason: e.to_string(),
    })
}

/// Read-only view of an `<a href>` element handed to a [`LinkPredicate`].
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a> {
    element: ElementRef<'a>,
    href: &'a str,
}

impl<'a> Anchor<'a> {
    /// Wrap an element; `None` when it has no `href`.
    pub fn new(element: ElementRef<'a>) -> Option<Self> {
        let href = element.value().attr("href")?;
        Some(Self { element, href })
    }

    /// The raw, unresolved `href` attribute.
    pub fn href(&self) -> &'a str {
        self.href
    }

    pub fn aria_label(&self) -> Option<&'a str> {
        self.element.value().attr("aria-label")
    }

    /// All descendant text, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Text of the `h2` elements nested inside the anchor, trimmed.
    pub fn heading(&self) -> String {
        self.element
            .select(&HEADING_SELECTOR)
            .flat_map(|heading| heading.text())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

/// Make an href absolute.
///
/// Hrefs that already start with `http` are kept verbatim; anything else is resolved
/// against `origin`. Returns `None` when resolution fails.
pub fn resolve_url(href: &str, origin: &Url) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    origin.join(href).ok().map(|url| url.to_string())
}

/// Lazily yield the relevant links of a listing document, in document order.
pub fn links<'a>(
    document: &'a Html,
    anchors: &'a Selector,
    origin: &'a Url,
    predicate: LinkPredicate,
) -> impl Iterator<Item = Link> + 'a {
    document
        .select(anchors)
        .filter_map(Anchor::new)
        .filter_map(move |anchor| {
            let title = predicate(&anchor)?;
            match resolve_url(anchor.href(), origin) {
                Some(url) => Some(Link { title, url }),
                None => {
                    debug!(href = anchor.href(), "Dropping unresolvable href");
                    None
                }
            }
        })
}

/// Text of every element matching `paragraphs`, joined with `\n`.
///
/// Paragraph text is taken as-is. No match yields an empty string.
pub fn body_text(document: &Html, paragraphs: &Selector) -> String {
    document
        .select(paragraphs)
        .map(|paragraph| paragraph.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://www.bbc.com").unwrap()
    }

    fn any_text(anchor: &Anchor<'_>) -> Option<String> {
        let text = anchor.text();
        (!text.is_empty()).then_some(text)
    }

    #[test]
    fn test_resolve_relative_href() {
        assert_eq!(
            resolve_url("/news/articles/abc", &origin()).as_deref(),
            Some("https://www.bbc.com/news/articles/abc")
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_href() {
        assert_eq!(
            resolve_url("https://example.com/story?id=1", &origin()).as_deref(),
            Some("https://example.com/story?id=1")
        );
        assert_eq!(
            resolve_url("http://example.com/x", &origin()).as_deref(),
            Some("http://example.com/x")
        );
    }

    #[test]
    fn test_links_skip_anchors_without_href() {
        let html = Html::parse_document(
            r#"<a>No href</a><a href="/tech/a">First</a><a href="/tech/b">  </a>"#,
        );
        let anchors = parse_selector("a").unwrap();
        let origin = origin();

        let found: Vec<Link> = links(&html, &anchors, &origin, any_text).collect();
        assert_eq!(
            found,
            vec![Link {
                title: "First".to_string(),
                url: "https://www.bbc.com/tech/a".to_string(),
            }]
        );
    }

    #[test]
    fn test_anchor_accessors() {
        let html = Html::parse_fragment(
            r#"<a href="/x" aria-label="Label">  <span>Outer</span> <h2> Head </h2> </a>"#,
        );
        let selector = parse_selector("a").unwrap();
        let anchor = Anchor::new(html.select(&selector).next().unwrap()).unwrap();

        assert_eq!(anchor.href(), "/x");
        assert_eq!(anchor.aria_label(), Some("Label"));
        assert_eq!(anchor.heading(), "Head");
        assert!(anchor.text().starts_with("Outer"));
        assert!(anchor.text().ends_with("Head"));
    }

    #[test]
    fn test_body_text_joins_in_document_order() {
        let html = Html::parse_document(
            r#"<div class="entry-content"><p>One</p><aside><p>Two</p></aside><p> Three </p></div><p>Outside</p>"#,
        );
        let selector = parse_selector("div.entry-content p").unwrap();

        assert_eq!(body_text(&html, &selector), "One\nTwo\n Three ");
    }

    #[test]
    fn test_body_text_without_matches_is_empty() {
        let html = Html::parse_document("<html><body><p>Not in a container</p></body></html>");
        let selector = parse_selector("div.gnt_ar_b p").unwrap();

        assert_eq!(body_text(&html, &selector), "");
    }

    #[test]
    fn test_parse_selector_rejects_garbage() {
        let err = parse_selector("div[[").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector { selector: "div[[", .. }));
    }
}
