//! BBC Innovation: artificial intelligence.
//!
//! The listing page links stories through anchors wrapping an `h2` headline. Video
//! reels share the `/news/` prefix space on some cards and are excluded.

use super::SourceConfig;
use crate::extract::Anchor;
use crate::models::Source;

pub const ORIGIN: &str = "https://www.bbc.com";

pub fn config() -> SourceConfig {
    SourceConfig {
        source: Source::Bbc,
        origin: ORIGIN.to_string(),
        listing_path: "/innovation/artificial-intelligence",
        anchor_selector: r#"a[href*="/news/"]"#,
        select_link,
        body_selector: r#"div[data-component="text-block"] p"#,
        dedup_by_url: false,
    }
}

fn select_link(anchor: &Anchor<'_>) -> Option<String> {
    if anchor.href().contains("/reel/video/") {
        return None;
    }
    let title = anchor.heading();
    (!title.is_empty()).then_some(title)
}
