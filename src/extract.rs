//! Pure field extractors: each maps a raw feed item to one normalized field.

use regex::Regex;

use crate::types::RawItem;

/// Strip HTML markup, decode common entities, collapse whitespace runs to
/// single spaces, and trim the ends.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                // Keep a word boundary where the tag was.
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text excerpt for an item: the stripped summary if it yields any
/// text, otherwise the stripped full content, otherwise empty.
pub fn excerpt(item: &RawItem) -> String {
    for html in [item.summary_html.as_deref(), item.content_html.as_deref()]
        .into_iter()
        .flatten()
    {
        let text = strip_html(html);
        if !text.is_empty() {
            return text;
        }
    }
    String::new()
}

/// Resolve an item's image by trying each media field in order, then
/// scanning embedded HTML. Returns `None` only when nothing is extractable;
/// the caller falls back to a category placeholder.
pub fn pick_image(item: &RawItem) -> Option<String> {
    if let Some(url) = item.media_urls.first() {
        return Some(url.clone());
    }
    if let Some(url) = item.thumbnail_urls.first() {
        return Some(url.clone());
    }
    // Full content is more likely to carry the article image than the
    // summary, so it goes first.
    for html in [item.content_html.as_deref(), item.summary_html.as_deref()]
        .into_iter()
        .flatten()
    {
        if let Some(url) = image_from_html(html) {
            return Some(url);
        }
    }
    None
}

/// Pull an image URL out of HTML content. Lazy-loading attributes take
/// priority: `data-src`, then the first `srcset` candidate, then plain `src`.
pub fn image_from_html(html: &str) -> Option<String> {
    let attr = |name: &str| -> Option<String> {
        let pattern = format!(r#"(?i)<img[^>]+{}=["']([^"']+)["']"#, name);
        let re = Regex::new(&pattern).ok()?;
        Some(re.captures(html)?.get(1)?.as_str().to_string())
    };

    if let Some(url) = attr("data-src") {
        return Some(url);
    }
    if let Some(srcset) = attr("srcset") {
        if let Some(url) = first_from_srcset(&srcset) {
            return Some(url);
        }
    }
    attr("src")
}

/// First URL of a `srcset` attribute (candidates are comma-separated, each
/// being a URL optionally followed by a width/density descriptor).
pub fn first_from_srcset(srcset: &str) -> Option<String> {
    let first = srcset.split(',').next()?;
    let url = first.trim().split_whitespace().next()?;
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}
