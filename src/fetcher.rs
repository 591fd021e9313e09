use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::parser;
use crate::types::{FetchConfig, NewsError, ParsedFeed, Result};

/// HTTP fetcher for upstream feeds. One instance is shared across requests;
/// the underlying client enforces the per-fetch timeout.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch and parse one feed. Any failure (bad URL, network error,
    /// timeout, non-2xx status, malformed feed) surfaces as a [`NewsError`];
    /// the caller decides whether to isolate it. No retries.
    pub async fn fetch_feed(&self, url: &str) -> Result<ParsedFeed> {
        let parsed_url = Url::parse(url)?;
        if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
            return Err(NewsError::UnsupportedScheme(parsed_url.scheme().to_string()));
        }

        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let feed = parser::parse_feed(&body)?;

        info!("Fetched {} ({} items)", url, feed.items.len());
        Ok(feed)
    }
}
