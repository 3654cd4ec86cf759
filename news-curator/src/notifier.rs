use crate::rss_utils::feed::truncate_chars;
use crate::types::{CuratorError, Result};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// Slack rejects messages over 40 000 characters; stay below with headroom.
pub const MAX_MESSAGE_CHARS: usize = 39_000;
pub const TRUNCATION_NOTICE: &str = "\n\n_(message truncated because it was too long)_";

/// Cap `message` at [`MAX_MESSAGE_CHARS`], appending a notice when cut.
pub fn truncate_message(message: &str) -> String {
    let length = message.chars().count();
    if length <= MAX_MESSAGE_CHARS {
        return message.to_string();
    }
    warn!("Message too long, truncating ({} -> {})", length, MAX_MESSAGE_CHARS);
    format!("{}{}", truncate_chars(message, MAX_MESSAGE_CHARS), TRUNCATION_NOTICE)
}

pub fn format_error_notice(error_message: &str) -> String {
    format!(
        ":rotating_light: *An error occurred during article curation*\n\n```\n{}\n```",
        error_message
    )
}

/// Incoming-webhook poster
pub struct SlackNotifier {
    webhook_url: String,
    client: Client,
}

impl SlackNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            webhook_url: webhook_url.into(),
            client,
        })
    }

    /// Post `message` as `{"text": ...}`, truncated to the size limit.
    pub async fn post(&self, message: &str) -> Result<()> {
        let payload = json!({ "text": truncate_message(message) });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| CuratorError::Webhook(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CuratorError::Webhook(format!("webhook returned HTTP {}", status)));
        }

        info!("Posted {} characters to webhook", message.chars().count().min(MAX_MESSAGE_CHARS));
        Ok(())
    }

    pub async fn post_error(&self, error_message: &str) -> Result<()> {
        self.post(&format_error_notice(error_message)).await
    }
}
