use crate::llm_adapter::LlmAdapter;
use crate::types::{ArticleBatch, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Written instead of a selection when there is nothing to select from.
pub const NO_ARTICLES_SENTINEL: &str = ":warning: No articles were available for selection today.";

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Render the batch as the markdown list shown to the model.
pub fn format_articles_for_prompt(batch: &ArticleBatch) -> String {
    let mut lines = vec![format!("## Article list ({} items)\n", batch.articles.len())];

    for (i, article) in batch.articles.iter().enumerate() {
        lines.push(format!("### {}. {}", i + 1, or_placeholder(&article.title, "(untitled)")));
        lines.push(format!("- **Source**: {}", article.source));
        lines.push(format!("- **Section**: {}", or_placeholder(&article.section, "unknown")));
        lines.push(format!("- **Published**: {}", or_placeholder(&article.published_date, "unknown")));
        lines.push(format!("- **URL**: {}", article.url));
        lines.push(format!("- **Abstract**: {}", or_placeholder(&article.abstract_text, "(no abstract)")));
        lines.push(String::new());
    }

    lines.join("\n")
}

pub fn build_user_message(batch: &ArticleBatch, today: DateTime<Utc>) -> String {
    format!(
        "Select articles from the list below according to the selection criteria.\n\
         Today's date is {}.\n\n{}\n",
        today.format("%Y-%m-%d"),
        format_articles_for_prompt(batch)
    )
}

/// Ask the model to curate the batch.
///
/// An empty batch short-circuits to [`NO_ARTICLES_SENTINEL`] without calling
/// the adapter.
pub async fn select_articles(
    batch: &ArticleBatch,
    system_prompt: &str,
    adapter: &dyn LlmAdapter,
) -> Result<String> {
    if batch.is_empty() {
        warn!("No articles in batch, skipping selection");
        return Ok(NO_ARTICLES_SENTINEL.to_string());
    }

    info!("Selecting from {} articles with {}", batch.articles.len(), adapter.adapter_name());
    let user_message = build_user_message(batch, Utc::now());
    adapter.complete(system_prompt, &user_message).await
}
