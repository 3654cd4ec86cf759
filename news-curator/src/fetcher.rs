use crate::types::{CuratorError, FetchConfig, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Single-attempt HTTP client shared by the article sources.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// GET a feed document and return its body as text.
    pub async fn fetch_feed(&self, url: &str) -> Result<String> {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?;
        let response = Self::check_status(url, response)?;

        if let Some(content_length) = response.content_length() {
            let size_mb = content_length as usize / (1024 * 1024);
            if size_mb > self.config.max_feed_size_mb {
                return Err(CuratorError::FeedTooLarge { size_mb });
            }
        }

        let content = response.text().await?;
        info!(
            "Fetched feed: {} ({} bytes in {}ms)",
            url,
            content.len(),
            start_time.elapsed().as_millis()
        );
        Ok(content)
    }

    /// GET a JSON document with the given query parameters.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("Fetching JSON: {}", url);

        // Query strings carry credentials, keep them out of error messages.
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| e.without_url())?;
        let response = Self::check_status(url, response)?;

        // Read as text first so a malformed body surfaces as a parse error.
        let body = response.text().await.map_err(|e| e.without_url())?;
        serde_json::from_str(&body)
            .map_err(|e| CuratorError::Parse(format!("Invalid JSON from {}: {}", url, e)))
    }

    fn check_status(url: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(CuratorError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}
