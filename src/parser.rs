use feed_rs::parser;
use tracing::debug;

use crate::types::{NewsError, ParsedFeed, RawItem, Result};

/// Parse RSS or Atom content into a [`ParsedFeed`].
pub fn parse_feed(content: &str) -> Result<ParsedFeed> {
    debug!("Parsing feed content ({} bytes)", content.len());

    let feed = parser::parse(content.as_bytes())
        .map_err(|e| NewsError::Parse(format!("Failed to parse feed: {}", e)))?;

    let title = feed.title.map(|t| t.content);
    let items = feed.entries.into_iter().map(raw_item).collect();

    Ok(ParsedFeed { title, items })
}

/// Fold a feed-rs entry into the dialect-neutral [`RawItem`] shape.
///
/// feed-rs already merges the per-dialect keys for us: `guid`/`id` into the
/// entry id, `content:encoded` into the content body, enclosures and
/// media:content into media objects.
fn raw_item(entry: feed_rs::model::Entry) -> RawItem {
    let guid = if entry.id.is_empty() {
        None
    } else {
        Some(entry.id.clone())
    };

    let link = entry.links.first().map(|l| l.href.clone());

    let author = entry
        .authors
        .first()
        .map(|a| a.name.trim().to_string())
        .filter(|name| !name.is_empty());

    let mut media_urls = Vec::new();
    let mut thumbnail_urls = Vec::new();
    for media in &entry.media {
        media_urls.extend(
            media
                .content
                .iter()
                .filter_map(|c| c.url.as_ref().map(|u| u.to_string())),
        );
        thumbnail_urls.extend(media.thumbnails.iter().map(|t| t.image.uri.clone()));
    }

    RawItem {
        guid,
        title: entry.title.map(|t| t.content),
        link,
        author,
        published: entry.published.or(entry.updated),
        summary_html: entry.summary.map(|t| t.content),
        content_html: entry.content.and_then(|c| c.body),
        media_urls,
        thumbnail_urls,
    }
}
