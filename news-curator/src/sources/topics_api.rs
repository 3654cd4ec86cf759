use crate::traits::ArticleSource;
use crate::types::{Article, Result, Source, TopStoriesResponse};
use crate::Fetcher;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

pub const DEFAULT_TOPICS_BASE_URL: &str = "https://api.nytimes.com";
pub const TOPICS_SECTIONS: [&str; 3] = ["technology", "business", "world"];

/// New York Times Top Stories API, one request per section
pub struct TopicsApiSource {
    base_url: String,
    api_key: String,
    sections: Vec<String>,
    fetcher: Arc<Fetcher>,
}

impl TopicsApiSource {
    pub fn new(api_key: impl Into<String>, fetcher: Arc<Fetcher>) -> Self {
        Self {
            base_url: DEFAULT_TOPICS_BASE_URL.to_string(),
            api_key: api_key.into(),
            sections: TOPICS_SECTIONS.iter().map(|s| s.to_string()).collect(),
            fetcher,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn section_url(&self, section: &str) -> String {
        format!("{}/svc/topstories/v2/{}.json", self.base_url, section)
    }

    async fn pull_section(&self, section: &str) -> Result<Vec<Article>> {
        let url = self.section_url(section);
        let response: TopStoriesResponse = self
            .fetcher
            .fetch_json(&url, &[("api-key", self.api_key.as_str())])
            .await?;

        Ok(response
            .results
            .into_iter()
            .map(|story| Article {
                source: Source::Nyt,
                section: section.to_string(),
                title: story.title.unwrap_or_default(),
                abstract_text: story.abstract_text.unwrap_or_default(),
                url: story.url.unwrap_or_default(),
                published_date: story.published_date.unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl ArticleSource for TopicsApiSource {
    fn source(&self) -> Source {
        Source::Nyt
    }

    async fn pull(&self) -> Vec<Article> {
        let mut articles = Vec::new();

        for section in &self.sections {
            match self.pull_section(section).await {
                Ok(section_articles) => {
                    info!("Pulled {} stories from NYT {}", section_articles.len(), section);
                    articles.extend(section_articles);
                }
                Err(e) => {
                    error!("Failed to fetch NYT {}: {}", section, e);
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

    #[test]
    fn builds_section_urls_against_base() {
        let fetcher = Arc::new(Fetcher::new(FetchConfig::default()).unwrap());
        let source = TopicsApiSource::new("key", fetcher).with_base_url("http://localhost:1234/");
        assert_eq!(
            source.section_url("world"),
            "http://localhost:1234/svc/topstories/v2/world.json"
        );
    }
}
