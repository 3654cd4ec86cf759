use crate::sources::{RssFeedSource, SummaryPolicy};
use crate::traits::ArticleSource;
use crate::types::{Article, Source};
use crate::Fetcher;
use async_trait::async_trait;
use std::sync::Arc;

pub const BLOOMBERG_FEEDS: [&str; 3] = [
    "https://feeds.bloomberg.com/markets/news.rss",
    "https://feeds.bloomberg.com/technology/news.rss",
    "https://feeds.bloomberg.com/politics/news.rss",
];

const BLOOMBERG_SECTIONS: [&str; 3] = ["markets", "technology", "politics"];

/// Bloomberg RSS feeds. Summaries are plain text and kept as published.
pub struct BloombergFeedSource {
    inner: RssFeedSource,
}

impl BloombergFeedSource {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self::with_feeds(BLOOMBERG_FEEDS.iter().map(|url| url.to_string()).collect(), fetcher)
    }

    pub fn with_feeds(feed_urls: Vec<String>, fetcher: Arc<Fetcher>) -> Self {
        let inner = RssFeedSource::new(Source::Bloomberg, feed_urls, fetcher)
            .with_sections(&BLOOMBERG_SECTIONS)
            .with_summary_policy(SummaryPolicy::Raw);

        Self { inner }
    }
}

#[async_trait]
impl ArticleSource for BloombergFeedSource {
    fn source(&self) -> Source {
        Source::Bloomberg
    }

    async fn pull(&self) -> Vec<Article> {
        self.inner.pull().await
    }
}
