use crate::types::{CuratorError, Result};
use std::env;

pub const NYT_API_KEY_VAR: &str = "NYT_API_KEY";
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const SLACK_WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";

/// Credentials of the three stages. Each stage asks only for its own.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub nyt_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub slack_webhook_url: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            nyt_api_key: non_empty_var(NYT_API_KEY_VAR),
            anthropic_api_key: non_empty_var(ANTHROPIC_API_KEY_VAR),
            slack_webhook_url: non_empty_var(SLACK_WEBHOOK_URL_VAR),
        }
    }

    pub fn require_nyt_api_key(&self) -> Result<&str> {
        require(&self.nyt_api_key, NYT_API_KEY_VAR)
    }

    pub fn require_anthropic_api_key(&self) -> Result<&str> {
        require(&self.anthropic_api_key, ANTHROPIC_API_KEY_VAR)
    }

    pub fn require_slack_webhook_url(&self) -> Result<&str> {
        require(&self.slack_webhook_url, SLACK_WEBHOOK_URL_VAR)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or(CuratorError::MissingCredential(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_name_the_variable() {
        let credentials = Credentials {
            nyt_api_key: Some("key".to_string()),
            anthropic_api_key: Some("  ".to_string()),
            slack_webhook_url: None,
        };

        assert_eq!(credentials.require_nyt_api_key().unwrap(), "key");
        let err = credentials.require_anthropic_api_key().unwrap_err();
        assert_eq!(err.to_string(), "ANTHROPIC_API_KEY is not set");
        assert!(matches!(
            credentials.require_slack_webhook_url(),
            Err(CuratorError::MissingCredential(SLACK_WEBHOOK_URL_VAR))
        ));
    }
}
