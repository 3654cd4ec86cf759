/// Helpers for normalizing feed entries into articles

/// Feed URL utilities
pub mod url {
    pub const DEFAULT_SECTION: &str = "general";

    /// Derive a section from a feed URL by substring match against `keywords`.
    ///
    /// Keywords are tried in order and the first hit wins. A URL matching none
    /// of them falls into [`DEFAULT_SECTION`].
    pub fn section_from_url(feed_url: &str, keywords: &[&str]) -> String {
        keywords
            .iter()
            .find(|keyword| feed_url.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .unwrap_or_else(|| DEFAULT_SECTION.to_string())
    }

    /// Validate feed URL format
    pub fn is_valid_feed_url(url_str: &str) -> bool {
        match ::url::Url::parse(url_str) {
            Ok(url) => url.scheme() == "http" || url.scheme() == "https",
            Err(_) => false,
        }
    }
}

/// Timestamp utilities
pub mod time {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

    /// Render a structured feed date as an ISO-8601 string.
    pub fn to_iso(timestamp: DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Parse an ISO-8601 timestamp as produced by the sources.
    ///
    /// Accepts a trailing `Z`, explicit offsets, naive date-times (taken as
    /// UTC) and bare dates (midnight UTC). Returns `None` for anything else.
    pub fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Utc));
        }
        // Colon-less offsets, minute precision and space separators
        for format in [
            "%Y-%m-%dT%H:%M:%S%.f%#z",
            "%Y-%m-%d %H:%M:%S%.f%#z",
            "%Y-%m-%dT%H:%M%#z",
            "%Y-%m-%d %H:%M%#z",
        ] {
            if let Ok(dt) = DateTime::parse_from_str(value, format) {
                return Some(dt.with_timezone(&Utc));
            }
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

/// Summary text utilities
pub mod feed {
    pub const MAX_ABSTRACT_CHARS: usize = 500;

    /// Remove `<...>` tags, leaving the surrounding text untouched.
    ///
    /// A `<` with no closing `>` is kept as literal text.
    pub fn strip_html_tags(html: &str) -> String {
        let mut text = String::with_capacity(html.len());
        let mut rest = html;
        while let Some(open) = rest.find('<') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('>') {
                Some(close) if close > 0 => rest = &after[close + 1..],
                _ => {
                    text.push('<');
                    rest = after;
                }
            }
        }
        text.push_str(rest);
        text
    }

    /// Cut `text` to at most `max_chars` characters.
    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => text[..byte_index].to_string(),
            None => text.to_string(),
        }
    }

    /// Strip markup and cap the length of a feed summary.
    pub fn clean_summary(summary: &str) -> String {
        truncate_chars(&strip_html_tags(summary), MAX_ABSTRACT_CHARS)
    }
}
