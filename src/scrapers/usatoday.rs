//! USA Today: tech section.

use super::{SourceConfig, has_ai_slug};
use crate::extract::Anchor;
use crate::models::Source;

pub const ORIGIN: &str = "https://www.usatoday.com";

pub fn config() -> SourceConfig {
    SourceConfig {
        source: Source::UsaToday,
        origin: ORIGIN.to_string(),
        listing_path: "/tech/",
        anchor_selector: "a",
        select_link,
        body_selector: "div.gnt_ar_b p",
        dedup_by_url: false,
    }
}

fn select_link(anchor: &Anchor<'_>) -> Option<String> {
    if !has_ai_slug(anchor.href()) {
        return None;
    }
    let title = anchor.text();
    (!title.is_empty()).then_some(title)
}
