use crate::rss_utils::{feed, time, url};
use crate::traits::ArticleSource;
use crate::types::{Article, ParsedEntry, Result, Source};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// How a feed's summary field becomes the article abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPolicy {
    /// Keep the summary exactly as published
    Raw,
    /// Strip HTML tags and cap at 500 characters
    StripHtml,
}

/// Generic RSS/Atom source reading a fixed list of feed URLs
pub struct RssFeedSource {
    source: Source,
    feed_urls: Vec<String>,
    section_keywords: Vec<&'static str>,
    summary_policy: SummaryPolicy,
    fetcher: Arc<Fetcher>,
    parser: FeedParser,
}

impl RssFeedSource {
    pub fn new(source: Source, feed_urls: Vec<String>, fetcher: Arc<Fetcher>) -> Self {
        for feed_url in &feed_urls {
            if !url::is_valid_feed_url(feed_url) {
                warn!("{} feed URL does not look fetchable: {}", source, feed_url);
            }
        }

        Self {
            source,
            feed_urls,
            section_keywords: Vec::new(),
            summary_policy: SummaryPolicy::Raw,
            fetcher,
            parser: FeedParser::new(),
        }
    }

    /// Keywords matched in order against each feed URL to derive the section.
    pub fn with_sections(mut self, keywords: &[&'static str]) -> Self {
        self.section_keywords = keywords.to_vec();
        self
    }

    pub fn with_summary_policy(mut self, policy: SummaryPolicy) -> Self {
        self.summary_policy = policy;
        self
    }

    async fn pull_feed(&self, feed_url: &str) -> Result<Vec<Article>> {
        let content = self.fetcher.fetch_feed(feed_url).await?;
        let parsed_feed = self.parser.parse_feed(&content)?;
        let section = url::section_from_url(feed_url, &self.section_keywords);
        info!(
            "Pulled {} entries from {} feed {:?} ({})",
            parsed_feed.entries.len(),
            self.source,
            parsed_feed.title.as_deref().unwrap_or("untitled"),
            feed_url
        );

        Ok(parsed_feed
            .entries
            .into_iter()
            .map(|entry| self.to_article(entry, &section))
            .collect())
    }

    fn to_article(&self, entry: ParsedEntry, section: &str) -> Article {
        // Structured dates first, then whatever text the feed carried.
        let published_date = entry
            .published_at
            .or(entry.updated_at)
            .map(time::to_iso)
            .or(entry.raw_date)
            .unwrap_or_default();

        let abstract_text = match self.summary_policy {
            SummaryPolicy::Raw => entry.summary,
            SummaryPolicy::StripHtml => feed::clean_summary(&entry.summary),
        };

        Article {
            source: self.source,
            section: section.to_string(),
            title: entry.title,
            abstract_text,
            url: entry.url,
            published_date,
        }
    }
}

#[async_trait]
impl ArticleSource for RssFeedSource {
    fn source(&self) -> Source {
        self.source
    }

    async fn pull(&self) -> Vec<Article> {
        let mut articles = Vec::new();

        for feed_url in &self.feed_urls {
            match self.pull_feed(feed_url).await {
                Ok(feed_articles) => articles.extend(feed_articles),
                Err(e) => {
                    error!("Failed to fetch {} feed {}: {}", self.source, feed_url, e);
                }
            }
        }

        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FetchConfig;
    use chrono::{TimeZone, Utc};

    fn source(policy: SummaryPolicy) -> RssFeedSource {
        let fetcher = Arc::new(Fetcher::new(FetchConfig::default()).unwrap());
        RssFeedSource::new(Source::Guardian, vec![], fetcher)
            .with_sections(&["world", "business"])
            .with_summary_policy(policy)
    }

    fn entry(summary: &str) -> ParsedEntry {
        ParsedEntry {
            url: "https://example.com/a".to_string(),
            title: "Title".to_string(),
            summary: summary.to_string(),
            published_at: None,
            updated_at: None,
            raw_date: None,
        }
    }

    #[test]
    fn strip_policy_cleans_summary_before_assignment() {
        let article = source(SummaryPolicy::StripHtml).to_article(entry("<p>Hello <b>world</b></p>"), "world");
        assert_eq!(article.abstract_text, "Hello world");
        assert_eq!(article.source, Source::Guardian);
        assert_eq!(article.section, "world");
    }

    #[test]
    fn raw_policy_keeps_markup() {
        let article = source(SummaryPolicy::Raw).to_article(entry("<p>Hi</p>"), "general");
        assert_eq!(article.abstract_text, "<p>Hi</p>");
    }

    #[test]
    fn undated_entry_is_kept_with_empty_date() {
        let article = source(SummaryPolicy::Raw).to_article(entry(""), "general");
        assert_eq!(article.published_date, "");
        assert_eq!(article.url, "https://example.com/a");
    }

    #[test]
    fn falls_back_to_updated_date() {
        let mut e = entry("");
        e.updated_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
        let article = source(SummaryPolicy::Raw).to_article(e, "general");
        assert_eq!(article.published_date, "2024-03-01T09:00:00Z");
    }

    #[test]
    fn unreadable_date_keeps_its_raw_text() {
        let mut e = entry("");
        e.raw_date = Some("Tuesday morning, 10am EST".to_string());
        let article = source(SummaryPolicy::Raw).to_article(e, "general");
        assert_eq!(article.published_date, "Tuesday morning, 10am EST");
    }

    #[test]
    fn structured_date_wins_over_raw_text() {
        let mut e = entry("");
        e.published_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
        e.raw_date = Some("Fri, 01 Mar 2024 09:00:00 GMT".to_string());
        let article = source(SummaryPolicy::Raw).to_article(e, "general");
        assert_eq!(article.published_date, "2024-03-01T09:00:00Z");
    }
}
