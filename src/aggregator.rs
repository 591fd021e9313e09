use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config;
use crate::extract;
use crate::fallback::FallbackImages;
use crate::fetcher::FeedFetcher;
use crate::types::{Article, Category, FetchConfig, RawItem, Result, Source};

/// Fetches every configured source and assembles the response payload.
pub struct NewsAggregator {
    fetcher: FeedFetcher,
    sources: Vec<Source>,
    fallback: FallbackImages,
}

impl NewsAggregator {
    pub fn new(sources: Vec<Source>, fetch_config: FetchConfig) -> Self {
        Self {
            fetcher: FeedFetcher::new(&fetch_config),
            sources,
            fallback: FallbackImages::new(),
        }
    }

    /// Run the full fetch → normalize → aggregate pipeline.
    ///
    /// Sources are fetched sequentially, best effort: a failing source is
    /// logged and skipped, and the batch always completes. All sources
    /// failing yields an empty list, not an error.
    pub async fn collect_articles(&self) -> Result<Vec<Article>> {
        let now = Utc::now();
        let mut articles = Vec::new();

        for source in &self.sources {
            match self.fetcher.fetch_feed(&source.url).await {
                Ok(feed) => {
                    let category =
                        Category::classify(&source.label, feed.title.as_deref().unwrap_or(""));
                    articles.extend(
                        feed.items
                            .iter()
                            .map(|item| normalize_item(item, source, category, &self.fallback, now)),
                    );
                }
                Err(e) => {
                    warn!("Skipping source {}: {}", source.label, e);
                }
            }
        }

        let articles = aggregate(articles);
        info!("Assembled {} articles from {} sources", articles.len(), self.sources.len());
        Ok(articles)
    }
}

/// Map one raw item into the canonical article shape, filling missing fields
/// with deterministic fallbacks.
pub fn normalize_item(
    item: &RawItem,
    source: &Source,
    category: Category,
    fallback: &FallbackImages,
    now: DateTime<Utc>,
) -> Article {
    let seed = item
        .guid
        .as_deref()
        .or(item.link.as_deref())
        .or(item.title.as_deref());
    let image = extract::pick_image(item)
        .unwrap_or_else(|| fallback.image_for(category, seed).to_string());

    let author = item
        .author
        .clone()
        .filter(|a| !a.is_empty())
        .or_else(|| (!source.label.is_empty()).then(|| source.label.clone()))
        .unwrap_or_else(|| "News Desk".to_string());

    // Clamp: an unparseable or future-dated item is pinned to fetch time.
    let published_at = item.published.map(|ts| ts.min(now)).unwrap_or(now);

    Article {
        id: item.guid.clone().or_else(|| item.link.clone()).unwrap_or_default(),
        title: item.title.as_deref().unwrap_or("").trim().to_string(),
        excerpt: extract::excerpt(item),
        image,
        category,
        author,
        published_at,
        url: item.link.clone().unwrap_or_default(),
        tags: Vec::new(),
        source: source.label.clone(),
    }
}

/// Aggregation pipeline over the normalized articles of all sources:
/// drop items with an empty title or url, dedup by lowercased title keeping
/// the first occurrence, sort newest first (stable, so ties keep input
/// order), and cap the result.
pub fn aggregate(items: Vec<Article>) -> Vec<Article> {
    let mut seen_titles = HashSet::new();
    let mut articles: Vec<Article> = items
        .into_iter()
        .filter(|a| !a.title.is_empty() && !a.url.is_empty())
        .filter(|a| seen_titles.insert(a.title.to_lowercase()))
        .collect();

    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles.truncate(config::RESPONSE_LIMIT);
    articles
}
