use crate::types::{Article, Source};
use async_trait::async_trait;

/// Trait for pulling articles from one upstream source family (topics API,
/// RSS feeds, ...).
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Origin tag stamped on every article this source produces
    fn source(&self) -> Source;

    /// Human-readable name for logs
    fn source_name(&self) -> String {
        self.source().to_string()
    }

    /// Fetch and normalize every article currently offered by the source.
    ///
    /// Never fails: an upstream unit (API section, feed URL) that cannot be
    /// fetched or parsed is logged and contributes nothing.
    async fn pull(&self) -> Vec<Article>;
}
