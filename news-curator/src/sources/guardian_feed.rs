use crate::sources::{RssFeedSource, SummaryPolicy};
use crate::traits::ArticleSource;
use crate::types::{Article, Source};
use crate::Fetcher;
use async_trait::async_trait;
use std::sync::Arc;

pub const GUARDIAN_FEEDS: [&str; 3] = [
    "https://www.theguardian.com/world/rss",
    "https://www.theguardian.com/business/rss",
    "https://www.theguardian.com/technology/rss",
];

const GUARDIAN_SECTIONS: [&str; 3] = ["world", "business", "technology"];

/// The Guardian RSS feeds. Their summaries embed HTML, so they are stripped
/// and capped when the article is built.
pub struct GuardianFeedSource {
    inner: RssFeedSource,
}

impl GuardianFeedSource {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self::with_feeds(GUARDIAN_FEEDS.iter().map(|url| url.to_string()).collect(), fetcher)
    }

    pub fn with_feeds(feed_urls: Vec<String>, fetcher: Arc<Fetcher>) -> Self {
        let inner = RssFeedSource::new(Source::Guardian, feed_urls, fetcher)
            .with_sections(&GUARDIAN_SECTIONS)
            .with_summary_policy(SummaryPolicy::StripHtml);

        Self { inner }
    }
}

#[async_trait]
impl ArticleSource for GuardianFeedSource {
    fn source(&self) -> Source {
        Source::Guardian
    }

    async fn pull(&self) -> Vec<Article> {
        self.inner.pull().await
    }
}
