use anyhow::Context;
use clap::{Parser, Subcommand};
use news_curator::{
    digest, load_batch, AnthropicAdapter, Credentials, FetchConfig, NewsAggregator, PipelineConfig,
    SlackNotifier, DEFAULT_ARTICLES_PATH, DEFAULT_PROMPT_PATH, DEFAULT_SELECTION_PATH,
    DEFAULT_WINDOW_HOURS,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "news-curator", about = "Fetch, curate and post daily news")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch articles from all sources and write them as JSON
    Fetch {
        #[arg(short, long, default_value = DEFAULT_ARTICLES_PATH)]
        output: PathBuf,
        /// Only keep articles published within this many hours
        #[arg(long, default_value_t = DEFAULT_WINDOW_HOURS)]
        hours: i64,
    },
    /// Ask the LLM to select articles from a fetched batch
    Select {
        #[arg(short, long, default_value = DEFAULT_ARTICLES_PATH)]
        input: PathBuf,
        #[arg(short, long, default_value = DEFAULT_SELECTION_PATH)]
        output: PathBuf,
        #[arg(short, long, default_value = DEFAULT_PROMPT_PATH)]
        prompt: PathBuf,
    },
    /// Post the selection (or a message) to the webhook
    Post {
        #[arg(short, long, default_value = DEFAULT_SELECTION_PATH)]
        input: PathBuf,
        /// Post this text instead of reading --input
        #[arg(short, long)]
        message: Option<String>,
        /// Post an error notice with this text
        #[arg(long)]
        error: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let credentials = Credentials::from_env();

    let result = match cli.command {
        Command::Fetch { output, hours } => fetch(&credentials, output, hours).await,
        Command::Select { input, output, prompt } => select(&credentials, input, output, prompt).await,
        Command::Post { input, message, error } => post(&credentials, input, message, error).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn fetch(credentials: &Credentials, output: PathBuf, hours: i64) -> anyhow::Result<()> {
    let api_key = credentials.require_nyt_api_key()?;
    let config = PipelineConfig {
        window_hours: hours,
        output_path: output,
    };

    let aggregator = NewsAggregator::new(api_key, &config, FetchConfig::default())?;
    aggregator
        .run()
        .await
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    Ok(())
}

async fn select(
    credentials: &Credentials,
    input: PathBuf,
    output: PathBuf,
    prompt: PathBuf,
) -> anyhow::Result<()> {
    let api_key = credentials.require_anthropic_api_key()?;

    info!("Loading articles from {}", input.display());
    let batch = load_batch(&input)?;
    info!("Loaded {} articles", batch.articles.len());

    anyhow::ensure!(prompt.exists(), "Prompt file not found: {}", prompt.display());
    let system_prompt = fs::read_to_string(&prompt)
        .with_context(|| format!("Failed to read prompt {}", prompt.display()))?;

    let adapter = AnthropicAdapter::new(api_key)?;
    let selection = digest::select_articles(&batch, &system_prompt, &adapter).await?;

    fs::write(&output, selection).with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote selection to {}", output.display());
    Ok(())
}

/// A blank `--error` is treated as absent.
fn requested_error_notice(error_text: Option<String>) -> Option<String> {
    error_text.filter(|text| !text.trim().is_empty())
}

async fn post(
    credentials: &Credentials,
    input: PathBuf,
    message: Option<String>,
    error_text: Option<String>,
) -> anyhow::Result<()> {
    let webhook_url = credentials.require_slack_webhook_url()?;
    let notifier = SlackNotifier::new(webhook_url)?;

    if let Some(error_text) = requested_error_notice(error_text) {
        info!("Posting error notice");
        notifier.post_error(&error_text).await?;
        return Ok(());
    }

    let message = match message {
        Some(message) => message,
        None => {
            anyhow::ensure!(input.exists(), "Input file not found: {}", input.display());
            fs::read_to_string(&input).with_context(|| format!("Failed to read {}", input.display()))?
        }
    };

    if message.trim().is_empty() {
        warn!("Message is empty, nothing to post");
        return Ok(());
    }

    info!("Posting to webhook");
    notifier.post(&message).await?;
    info!("Posted");
    Ok(())
}
