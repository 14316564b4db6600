//! The Guardian: artificial intelligence section.
//!
//! Cards carry the headline in `aria-label`, which doubles as the relevance signal.

use super::SourceConfig;
use crate::extract::Anchor;
use crate::models::Source;

pub const ORIGIN: &str = "https://www.theguardian.com";

pub fn config() -> SourceConfig {
    SourceConfig {
        source: Source::Guardian,
        origin: ORIGIN.to_string(),
        listing_path: "/technology/artificialintelligenceai",
        anchor_selector: "a",
        select_link,
        body_selector: "div.article-body-commercial-selector p",
        dedup_by_url: false,
    }
}

/// Anchors without an `aria-label` are never selected, whatever their text says.
fn select_link(anchor: &Anchor<'_>) -> Option<String> {
    let label = anchor.aria_label()?;
    label
        .to_lowercase()
        .contains("ai")
        .then(|| label.to_string())
}
