#![allow(dead_code)]

use chrono::{Duration, Utc};
use news_curator::{FetchConfig, Fetcher};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn fetcher() -> Arc<Fetcher> {
    let config = FetchConfig {
        user_agent: "News-Curator-Test/1.0".to_string(),
        timeout_seconds: 5,
        max_feed_size_mb: 10,
    };
    Arc::new(Fetcher::new(config).expect("client"))
}

/// RFC 2822 date `hours` in the past, as RSS pubDate carries it.
pub fn pub_date_hours_ago(hours: i64) -> String {
    (Utc::now() - Duration::hours(hours)).to_rfc2822()
}

/// (title, link, description, pubDate) items rendered as an RSS 2.0 document.
pub fn rss_document(items: &[(&str, &str, &str, Option<String>)]) -> String {
    let mut body = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Test feed</title><link>https://example.com</link><description>Test</description>"#,
    );
    for (title, link, description, pub_date) in items {
        body.push_str("<item>");
        body.push_str(&format!("<title>{}</title>", title));
        body.push_str(&format!("<link>{}</link>", link));
        body.push_str(&format!("<description><![CDATA[{}]]></description>", description));
        if let Some(pub_date) = pub_date {
            body.push_str(&format!("<pubDate>{}</pubDate>", pub_date));
        }
        body.push_str("</item>");
    }
    body.push_str("</channel></rss>");
    body
}
