//! AI Daily News Digest — Binary Entrypoint
//! One-shot batch run: curate candidates from the configured feeds, have the
//! generation service write the digest, push it, exit. No scheduler, no state
//! across runs.

use chrono::Utc;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ai_news_digest::config::AppConfig;
use ai_news_digest::digest::compose_and_deliver;
use ai_news_digest::generate::OpenAiGenerator;
use ai_news_digest::ingest::{self, fetcher::FeedFetcher};
use ai_news_digest::notify::TelegramNotifier;

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op in prod environments.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!(error = %format!("{e:#}"), "digest run failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let fetcher = FeedFetcher::new()?;
    let candidates = ingest::run_once(&fetcher).await;

    let generator = OpenAiGenerator::new(config.openai_api_key)?;
    let notifier = TelegramNotifier::new(config.telegram_bot_token, config.telegram_chat_id)?;

    compose_and_deliver(Utc::now(), &candidates, &generator, &notifier).await
}
