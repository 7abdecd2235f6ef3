// src/config.rs
//! Process configuration: static feed list, fetch tuning, and the secrets
//! required by the generation/delivery boundaries.

use anyhow::{bail, Result};
use std::time::Duration;

/// Statically configured feed sources (mixed English/Chinese tech outlets).
pub const FEED_URLS: &[&str] = &[
    "https://technews.tw/feed/",
    "https://www.ithome.com.tw/rss",
    "https://36kr.com/feed",
    "https://www.jiqizhixin.com/rss",
    "https://techcrunch.com/category/artificial-intelligence/feed/",
    "https://www.theverge.com/rss/index.xml",
];

/// Identifying header sent with every feed request.
pub const USER_AGENT: &str = "ai-news-digest/0.1 (+https://github.com/ai-news-digest)";

/// Per-request bound; a source that exceeds it contributes zero entries.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(12);

/// Sliding lookback window applied uniformly at pipeline start.
pub const LOOKBACK_HOURS: i64 = 24;

/// Upper bound on the candidate list handed to the generation service.
pub const MAX_CANDIDATES: usize = 20;

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Secrets read once at startup and passed by parameter; a missing variable is
/// a fatal configuration error reported before any network work happens.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
}

impl AppConfig {
    /// Read all required variables, reporting every missing one in a single
    /// error so operators fix the environment in one pass.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();
        let openai_api_key = read_var(ENV_OPENAI_API_KEY, &mut missing);
        let telegram_bot_token = read_var(ENV_TELEGRAM_BOT_TOKEN, &mut missing);
        let telegram_chat_id = read_var(ENV_TELEGRAM_CHAT_ID, &mut missing);

        if !missing.is_empty() {
            bail!("missing required environment variables: {}", missing.join(", "));
        }
        Ok(Self {
            openai_api_key,
            telegram_bot_token,
            telegram_chat_id,
        })
    }
}

fn read_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
