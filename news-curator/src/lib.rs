pub mod aggregator;
pub mod config;
pub mod digest;
pub mod fetcher;
pub mod llm_adapter;
pub mod notifier;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod processing;
pub mod rss_utils;
pub mod sources;
pub mod traits;
pub mod types;

pub use types::*;
pub use aggregator::NewsAggregator;
pub use config::Credentials;
pub use digest::{select_articles, NO_ARTICLES_SENTINEL};
pub use fetcher::Fetcher;
pub use llm_adapter::{AnthropicAdapter, LlmAdapter, MockLlmAdapter};
pub use notifier::SlackNotifier;
pub use output::{load_batch, JsonFileWriter, OutputWriter};
pub use parser::FeedParser;
pub use pipeline::{IngestionPipeline, PipelineBuilder, PipelineOutcome, PipelineReport};
pub use processing::{dedupe, filter_recent, DedupStage, ProcessingStage, TimeWindowStage};
pub use sources::{BloombergFeedSource, GuardianFeedSource, RssFeedSource, SummaryPolicy, TopicsApiSource};
pub use traits::ArticleSource;
