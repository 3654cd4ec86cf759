use crate::types::{CuratorError, ParsedEntry, ParsedFeed, Result};
use chrono::Utc;
use feed_rs::parser;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

/// Turns RSS/Atom documents into flat entries.
///
/// Unlike a long-lived aggregator this parser keeps no seen-set: every entry
/// is returned, duplicates are the pipeline's concern.
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_feed(&self, content: &str) -> Result<ParsedFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| CuratorError::Parse(format!("Failed to parse feed: {}", e)))?;

        let title = feed.title.map(|t| t.content);

        let mut raw_dates = raw_entry_dates(content);
        if raw_dates.len() != feed.entries.len() {
            debug!(
                "Raw date scan found {} entries, parser found {}; ignoring raw dates",
                raw_dates.len(),
                feed.entries.len()
            );
            raw_dates = vec![None; feed.entries.len()];
        }

        let entries: Vec<ParsedEntry> = feed
            .entries
            .into_iter()
            .zip(raw_dates)
            .map(|(entry, raw_date)| Self::parse_entry(entry, raw_date))
            .collect();

        debug!("Parsed feed with {} entries", entries.len());

        Ok(ParsedFeed { title, entries })
    }

    fn parse_entry(entry: feed_rs::model::Entry, raw_date: Option<String>) -> ParsedEntry {
        let title = entry.title.map(|t| t.content).unwrap_or_default();
        let url = entry
            .links
            .first()
            .map(|link| link.href.clone())
            .unwrap_or_default();

        // Atom feeds sometimes carry the body only as content.
        let summary = entry
            .summary
            .map(|s| s.content)
            .or_else(|| entry.content.and_then(|c| c.body))
            .unwrap_or_default();

        ParsedEntry {
            url,
            title,
            summary,
            published_at: entry.published.map(|dt| dt.with_timezone(&Utc)),
            updated_at: entry.updated.map(|dt| dt.with_timezone(&Utc)),
            raw_date,
        }
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_entry_tag(name: &[u8]) -> bool {
    matches!(name, b"item" | b"entry")
}

/// `pubDate` (RSS), `published` (Atom) and `dc:date`
fn is_date_tag(name: &[u8]) -> bool {
    matches!(name, b"pubDate" | b"published" | b"date")
}

/// Text of the first date element of every item/entry, in document order.
///
/// The structured parse drops dates it cannot read; this keeps their text.
fn raw_entry_dates(content: &str) -> Vec<Option<String>> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut dates: Vec<Option<String>> = Vec::new();
    let mut in_entry = false;
    let mut capturing = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                if is_entry_tag(name.as_ref()) {
                    in_entry = true;
                    dates.push(None);
                } else if in_entry && is_date_tag(name.as_ref()) && dates.last().is_some_and(Option::is_none) {
                    capturing = true;
                    text.clear();
                }
            }
            Ok(Event::Text(t)) if capturing => match t.unescape() {
                Ok(unescaped) => text.push_str(&unescaped),
                Err(_) => text.push_str(&String::from_utf8_lossy(&t)),
            },
            Ok(Event::CData(c)) if capturing => text.push_str(&String::from_utf8_lossy(&c)),
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if capturing && is_date_tag(name.as_ref()) {
                    capturing = false;
                    let value = text.trim();
                    if let Some(slot) = dates.last_mut().filter(|_| !value.is_empty()) {
                        *slot = Some(value.to_string());
                    }
                } else if is_entry_tag(name.as_ref()) {
                    in_entry = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                debug!("Raw date scan stopped: {}", e);
                break;
            }
            _ => {}
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Sample</title>
    <link>https://example.com</link>
    <description>Sample feed</description>
    <item>
      <title>First</title>
      <link>https://example.com/first</link>
      <description>Summary one</description>
      <pubDate>Mon, 02 Jan 2023 15:04:05 GMT</pubDate>
    </item>
    <item>
      <title>Second</title>
      <link>https://example.com/first</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn keeps_every_entry_including_repeats() {
        let parsed = FeedParser::new().parse_feed(RSS).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Sample"));
        assert_eq!(parsed.entries.len(), 2);

        let first = &parsed.entries[0];
        assert_eq!(first.title, "First");
        assert_eq!(first.url, "https://example.com/first");
        assert_eq!(first.summary, "Summary one");
        assert_eq!(
            first.published_at.unwrap().to_rfc3339(),
            "2023-01-02T15:04:05+00:00"
        );

        let second = &parsed.entries[1];
        assert!(second.summary.is_empty());
        assert!(second.published_at.is_none());
    }

    #[test]
    fn keeps_raw_text_of_unreadable_dates() {
        let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Odd dates</title>
    <item>
      <title>Vague</title>
      <link>https://example.com/vague</link>
      <pubDate>Tuesday morning, 10am EST</pubDate>
    </item>
    <item>
      <title>Dublin Core</title>
      <link>https://example.com/dc</link>
      <dc:date><![CDATA[sometime in May]]></dc:date>
    </item>
    <item>
      <title>None</title>
      <link>https://example.com/none</link>
    </item>
  </channel>
</rss>"#;
        let parsed = FeedParser::new().parse_feed(rss).unwrap();
        assert_eq!(parsed.entries.len(), 3);

        assert!(parsed.entries[0].published_at.is_none());
        assert_eq!(parsed.entries[0].raw_date.as_deref(), Some("Tuesday morning, 10am EST"));
        assert_eq!(parsed.entries[1].raw_date.as_deref(), Some("sometime in May"));
        assert_eq!(parsed.entries[2].raw_date, None);
    }

    #[test]
    fn raw_dates_follow_atom_entries() {
        let atom = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom</title>
  <id>urn:feed</id>
  <updated>2024-05-01T00:00:00Z</updated>
  <entry>
    <title>One</title>
    <id>urn:one</id>
    <link href="https://example.com/one"/>
    <published>2024-05-01T12:30:00Z</published>
    <updated>2024-05-01T13:00:00Z</updated>
  </entry>
</feed>"#;
        let parsed = FeedParser::new().parse_feed(atom).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].raw_date.as_deref(), Some("2024-05-01T12:30:00Z"));
        assert!(parsed.entries[0].published_at.is_some());
    }

    #[test]
    fn rejects_non_feed_content() {
        let err = FeedParser::new().parse_feed("<html><body>nope</body></html>");
        assert!(matches!(err, Err(CuratorError::Parse(_))));
    }
}
