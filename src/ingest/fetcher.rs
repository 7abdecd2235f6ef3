// src/ingest/fetcher.rs
//! Per-source feed retrieval. Sources are fetched concurrently and in
//! isolation: one slow or broken feed must never abort the run, it just
//! contributes zero entries.

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT, USER_AGENT};
use crate::ingest::types::RawEntry;

pub struct FeedFetcher {
    client: reqwest::Client,
}

impl FeedFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("building feed http client")?;
        Ok(Self { client })
    }

    /// Fetch every source concurrently and concatenate whatever parsed.
    /// Failures are logged as warnings per source; no retries. Order of the
    /// merged output is not significant at this stage.
    pub async fn fetch_all(&self, urls: &[&str]) -> Vec<RawEntry> {
        let mut tasks = JoinSet::new();
        for url in urls {
            let client = self.client.clone();
            let url = url.to_string();
            tasks.spawn(async move {
                let entries = fetch_source(&client, &url).await;
                (url, entries)
            });
        }

        let mut merged = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((url, Ok(entries))) => {
                    debug!(source = %url, entries = entries.len(), "feed fetched");
                    merged.extend(entries);
                }
                Ok((url, Err(e))) => {
                    warn!(source = %url, error = %format!("{e:#}"), "feed skipped");
                }
                Err(e) => {
                    warn!(error = %e, "feed task panicked");
                }
            }
        }
        merged
    }
}

async fn fetch_source(client: &reqwest::Client, url: &str) -> Result<Vec<RawEntry>> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("non-success status from {url}"))?;
    let body = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {url}"))?;
    parse_feed(&body)
}

/// Parse a raw feed body (RSS or Atom) into entries. Pure over the bytes, so
/// fixtures exercise it without network.
pub fn parse_feed(body: &[u8]) -> Result<Vec<RawEntry>> {
    let feed = feed_rs::parser::parse(body).context("parsing feed body")?;
    let source_label = feed
        .title
        .map(|t| t.content.trim().to_string())
        .unwrap_or_default();

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| RawEntry {
            title: entry
                .title
                .map(|t| t.content)
                .unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default(),
            guid: entry.id,
            published: entry.published.map(|dt| dt.with_timezone(&Utc)),
            updated: entry.updated.map(|dt| dt.with_timezone(&Utc)),
            source_label: source_label.clone(),
        })
        .collect();
    Ok(entries)
}
