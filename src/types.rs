use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One configured upstream feed with a human-readable label.
///
/// The source list is static, process-wide configuration; see
/// [`crate::config::default_sources`].
#[derive(Debug, Clone)]
pub struct Source {
    pub label: String,
    pub url: String,
}

impl Source {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Closed set of article categories served to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Nation,
    Metro,
    Business,
    World,
    Sports,
    Tech,
    Showbiz,
}

impl Category {
    /// Heuristic classification from the source label and feed title.
    ///
    /// Keyword sets are tested in a fixed priority order and the first match
    /// wins. False positives are acceptable; nothing downstream corrects the
    /// result. Anything unmatched lands in `Top`.
    pub fn classify(source_label: &str, feed_title: &str) -> Self {
        let haystack = format!("{} {}", source_label, feed_title).to_lowercase();

        if haystack.contains("business") {
            Category::Business
        } else if haystack.contains("sports") {
            Category::Sports
        } else if haystack.contains("world") {
            Category::World
        } else if haystack.contains("tech") || haystack.contains("science") {
            Category::Tech
        } else if haystack.contains("metro")
            || haystack.contains("nation")
            || haystack.contains("philippines")
        {
            Category::Nation
        } else {
            Category::Top
        }
    }
}

/// One feed entry after parsing, before normalization into an [`Article`].
///
/// Feed dialects expose the same logical field under several different keys
/// (`content:encoded` vs `content`, enclosures vs media extensions, and so
/// on). The parser folds each of those groups into exactly one field here so
/// the extractors can run an explicit ordered fallback chain instead of
/// probing dialect-specific keys.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    pub guid: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub author: Option<String>,
    pub published: Option<DateTime<Utc>>,
    /// Summary/description body, possibly HTML.
    pub summary_html: Option<String>,
    /// Full content body (`content:encoded` in RSS, `content` in Atom).
    pub content_html: Option<String>,
    /// Enclosure and media:content URLs, in document order.
    pub media_urls: Vec<String>,
    /// media:thumbnail URLs, in document order.
    pub thumbnail_urls: Vec<String>,
}

/// A successfully parsed feed: its title plus the raw items.
#[derive(Debug)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub items: Vec<RawItem>,
}

/// Canonical, normalized representation of one feed item as served to the
/// front end. Constructed fresh on every request; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Feed guid, falling back to the item link. Not globally unique across
    /// sources; deduplication uses the normalized title instead.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: Category,
    pub author: String,
    /// Never in the future relative to fetch time.
    pub published_at: DateTime<Utc>,
    pub url: String,
    pub tags: Vec<String>,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "news-aggregator/1.0".to_string(),
            timeout_seconds: 15,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP {status} from {url}")]
    UpstreamStatus { status: u16, url: String },
}

pub type Result<T> = std::result::Result<T, NewsError>;
