use crate::output::OutputWriter;
use crate::processing::{DedupStage, ProcessingStage, TimeWindowStage};
use crate::traits::ArticleSource;
use crate::types::{ArticleBatch, Result, DEFAULT_WINDOW_HOURS};
use tracing::info;

/// Per-stage article counts of one run. Purely observational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// (source name, articles pulled) in pull order
    pub fetched: Vec<(String, usize)>,
    pub total_fetched: usize,
    /// (stage name, articles remaining) in stage order
    pub stages: Vec<(String, usize)>,
}

impl PipelineReport {
    pub fn fetched_from(&self, source_name: &str) -> Option<usize> {
        self.fetched
            .iter()
            .find(|(name, _)| name == source_name)
            .map(|(_, count)| *count)
    }

    pub fn after_filter(&self) -> usize {
        self.stages.first().map_or(self.total_fetched, |(_, count)| *count)
    }

    pub fn after_dedup(&self) -> usize {
        self.stages.last().map_or(self.total_fetched, |(_, count)| *count)
    }
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub batch: ArticleBatch,
    pub report: PipelineReport,
}

/// Sequential fetch → time window → dedup pipeline
pub struct IngestionPipeline {
    sources: Vec<Box<dyn ArticleSource>>,
    processing_stages: Vec<Box<dyn ProcessingStage>>,
}

impl IngestionPipeline {
    pub fn new(window_hours: i64) -> Self {
        Self {
            sources: Vec::new(),
            processing_stages: vec![
                Box::new(TimeWindowStage::new(window_hours)),
                Box::new(DedupStage),
            ],
        }
    }

    pub fn add_source(&mut self, source: Box<dyn ArticleSource>) {
        info!("Adding source to pipeline: {}", source.source_name());
        self.sources.push(source);
    }

    /// Pull every source in turn, then run the stages over the combined list.
    pub async fn run(&self) -> PipelineOutcome {
        let mut report = PipelineReport::default();
        let mut articles = Vec::new();

        info!("Fetching articles from {} sources", self.sources.len());
        for source in &self.sources {
            let pulled = source.pull().await;
            info!("  {} -> {} articles", source.source_name(), pulled.len());
            report.fetched.push((source.source_name(), pulled.len()));
            articles.extend(pulled);
        }
        report.total_fetched = articles.len();

        for stage in &self.processing_stages {
            articles = stage.process(articles);
            info!("After {} -> {} articles", stage.stage_name(), articles.len());
            report.stages.push((stage.stage_name(), articles.len()));
        }

        PipelineOutcome {
            batch: ArticleBatch::new(articles),
            report,
        }
    }

    /// Run and hand the batch to `writer`. A write failure fails the run.
    pub async fn run_to(&self, writer: &dyn OutputWriter) -> Result<PipelineOutcome> {
        let outcome = self.run().await;
        writer.write(&outcome.batch)?;
        Ok(outcome)
    }
}

impl Default for IngestionPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_HOURS)
    }
}

/// Pipeline builder for easier configuration
pub struct PipelineBuilder {
    window_hours: i64,
    sources: Vec<Box<dyn ArticleSource>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            window_hours: DEFAULT_WINDOW_HOURS,
            sources: Vec::new(),
        }
    }

    pub fn window_hours(mut self, window_hours: i64) -> Self {
        self.window_hours = window_hours;
        self
    }

    pub fn add_source(mut self, source: Box<dyn ArticleSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn build(self) -> IngestionPipeline {
        let mut pipeline = IngestionPipeline::new(self.window_hours);
        for source in self.sources {
            pipeline.add_source(source);
        }
        pipeline
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
