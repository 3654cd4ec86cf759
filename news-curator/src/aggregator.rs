use crate::output::JsonFileWriter;
use crate::pipeline::{IngestionPipeline, PipelineBuilder, PipelineOutcome};
use crate::sources::{BloombergFeedSource, GuardianFeedSource, TopicsApiSource};
use crate::types::{FetchConfig, PipelineConfig, Result};
use crate::Fetcher;
use std::sync::Arc;
use tracing::info;

/// The fetch stage: NYT, Bloomberg and Guardian sources feeding one pipeline
/// whose batch lands in a JSON file.
pub struct NewsAggregator {
    pipeline: IngestionPipeline,
    writer: JsonFileWriter,
}

impl NewsAggregator {
    pub fn new(nyt_api_key: &str, config: &PipelineConfig, fetch_config: FetchConfig) -> Result<Self> {
        let fetcher = Arc::new(Fetcher::new(fetch_config)?);

        let pipeline = PipelineBuilder::new()
            .window_hours(config.window_hours)
            .add_source(Box::new(TopicsApiSource::new(nyt_api_key, fetcher.clone())))
            .add_source(Box::new(BloombergFeedSource::new(fetcher.clone())))
            .add_source(Box::new(GuardianFeedSource::new(fetcher)))
            .build();

        Ok(Self::with_pipeline(pipeline, config))
    }

    pub fn with_pipeline(pipeline: IngestionPipeline, config: &PipelineConfig) -> Self {
        Self {
            pipeline,
            writer: JsonFileWriter::new(&config.output_path),
        }
    }

    pub async fn run(&self) -> Result<PipelineOutcome> {
        let outcome = self.pipeline.run_to(&self.writer).await?;
        info!(
            "Fetch complete: {} fetched, {} within window, {} unique -> {}",
            outcome.report.total_fetched,
            outcome.report.after_filter(),
            outcome.report.after_dedup(),
            self.writer.path().display()
        );
        Ok(outcome)
    }
}
