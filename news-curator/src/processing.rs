use crate::rss_utils::time;
use crate::types::Article;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tracing::debug;

/// A pipeline stage that narrows an article list.
///
/// Stages only drop or pass articles through; they never edit them.
pub trait ProcessingStage: Send + Sync {
    fn process(&self, articles: Vec<Article>) -> Vec<Article>;

    fn stage_name(&self) -> String;
}

/// Keep articles published within the last `window_hours`.
///
/// Articles with no date or an unparseable one are kept.
pub fn filter_recent(articles: Vec<Article>, window_hours: i64) -> Vec<Article> {
    filter_recent_at(articles, window_hours, Utc::now())
}

pub fn filter_recent_at(articles: Vec<Article>, window_hours: i64, now: DateTime<Utc>) -> Vec<Article> {
    // A window reaching past the representable range keeps everything.
    let cutoff = Duration::try_hours(window_hours).and_then(|window| now.checked_sub_signed(window));

    articles
        .into_iter()
        .filter(|article| {
            if article.published_date.is_empty() {
                return true;
            }
            match time::parse_iso(&article.published_date) {
                Some(published) => cutoff.map_or(true, |cutoff| published >= cutoff),
                None => {
                    debug!("Keeping article with unparseable date {:?}: {}", article.published_date, article.url);
                    true
                }
            }
        })
        .collect()
}

/// Drop articles whose URL was already seen, keeping the first occurrence.
///
/// Articles without a URL are never treated as duplicates.
pub fn dedupe(articles: Vec<Article>) -> Vec<Article> {
    let mut seen_urls = HashSet::new();

    articles
        .into_iter()
        .filter(|article| article.url.is_empty() || seen_urls.insert(article.url.clone()))
        .collect()
}

pub struct TimeWindowStage {
    window_hours: i64,
}

impl TimeWindowStage {
    pub fn new(window_hours: i64) -> Self {
        Self { window_hours }
    }
}

impl ProcessingStage for TimeWindowStage {
    fn process(&self, articles: Vec<Article>) -> Vec<Article> {
        filter_recent(articles, self.window_hours)
    }

    fn stage_name(&self) -> String {
        format!("time_window_{}h", self.window_hours)
    }
}

pub struct DedupStage;

impl ProcessingStage for DedupStage {
    fn process(&self, articles: Vec<Article>) -> Vec<Article> {
        dedupe(articles)
    }

    fn stage_name(&self) -> String {
        "dedup".to_string()
    }
}
