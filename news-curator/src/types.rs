use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

pub use interfaces::defs::{Article, ArticleBatch, Source};

pub const DEFAULT_ARTICLES_PATH: &str = "/tmp/today_articles.json";
pub const DEFAULT_SELECTION_PATH: &str = "/tmp/selected.md";
pub const DEFAULT_PROMPT_PATH: &str = "prompt.txt";
pub const DEFAULT_WINDOW_HOURS: i64 = 48;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "News-Curator/1.0".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub window_hours: i64,
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_hours: DEFAULT_WINDOW_HOURS,
            output_path: PathBuf::from(DEFAULT_ARTICLES_PATH),
        }
    }
}

/// Body of a Top Stories section response. Only the fields we map are read.
#[derive(Debug, Deserialize)]
pub struct TopStoriesResponse {
    #[serde(default)]
    pub results: Vec<TopStory>,
}

#[derive(Debug, Deserialize)]
pub struct TopStory {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

#[derive(Debug)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<ParsedEntry>,
}

#[derive(Debug)]
pub struct ParsedEntry {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Date element text as written in the document
    pub raw_date: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Webhook error: {0}")]
    Webhook(String),
}

pub type Result<T> = std::result::Result<T, CuratorError>;
