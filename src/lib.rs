pub mod aggregator;
pub mod config;
pub mod extract;
pub mod fallback;
pub mod fetcher;
pub mod parser;
pub mod server;
pub mod types;

pub use aggregator::NewsAggregator;
pub use fallback::FallbackImages;
pub use fetcher::FeedFetcher;
pub use types::{Article, Category, FetchConfig, NewsError, ParsedFeed, RawItem, Result, Source};
