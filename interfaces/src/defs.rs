use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin tag of an article, one per upstream source family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "NYT")]
    Nyt,
    Bloomberg,
    Guardian,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Nyt => "NYT",
            Source::Bloomberg => "Bloomberg",
            Source::Guardian => "Guardian",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized news article.
///
/// `url` is the identity key. An empty `url` or `published_date` means the
/// upstream source did not provide one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub source: Source,
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_date: String,
}

/// The result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleBatch {
    pub fetched_at: String,
    pub total_count: usize,
    pub articles: Vec<Article>,
}

impl ArticleBatch {
    pub fn new(articles: Vec<Article>) -> Self {
        Self::at(articles, Utc::now())
    }

    pub fn at(articles: Vec<Article>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            fetched_at: fetched_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            total_count: articles.len(),
            articles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
