//! TechCrunch: artificial intelligence tag.
//!
//! Cards link the same story from both the image and the headline, so results are
//! deduplicated by url. ChatGPT coverage is excluded.

use super::{SourceConfig, has_ai_slug};
use crate::extract::Anchor;
use crate::models::Source;

pub const ORIGIN: &str = "https://techcrunch.com";

pub fn config() -> SourceConfig {
    SourceConfig {
        source: Source::TechCrunch,
        origin: ORIGIN.to_string(),
        listing_path: "/tag/artificial-intelligence/",
        anchor_selector: "a",
        select_link,
        body_selector: "div.entry-content p",
        dedup_by_url: true,
    }
}

fn select_link(anchor: &Anchor<'_>) -> Option<String> {
    let href = anchor.href();
    if !has_ai_slug(href) || href.contains("chatgpt") {
        return None;
    }
    let title = anchor.text();
    (!title.is_empty()).then_some(title)
}
