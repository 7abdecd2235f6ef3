// src/ingest/mod.rs
//! Candidate curation pipeline: fetch → normalize → dedup → filter → select.
//! A single batch pass per run; downstream stages only start once every fetch
//! has settled.

pub mod fetcher;
pub mod types;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::config::{FEED_URLS, LOOKBACK_HOURS, MAX_CANDIDATES};
use crate::filter;
use crate::ingest::fetcher::FeedFetcher;
use crate::ingest::types::{Candidate, RawEntry};

/// Fetch the configured sources and run the full curation pass. The lookback
/// window is anchored to a single `now` captured here and applied uniformly
/// to every source.
pub async fn run_once(fetcher: &FeedFetcher) -> Vec<Candidate> {
    let now = Utc::now();
    let raw = fetcher.fetch_all(FEED_URLS).await;
    curate(now, raw)
}

/// The batch stages after fetching. Split out so tests drive it with
/// synthetic entries and a fixed clock.
pub fn curate(now: DateTime<Utc>, raw: Vec<RawEntry>) -> Vec<Candidate> {
    let total = raw.len();
    let normalized = normalize_entries(now, raw);
    let windowed = normalized.len();
    let deduped = dedup_candidates(normalized);
    let unique = deduped.len();
    let relevant: Vec<Candidate> = deduped
        .into_iter()
        .filter(|c| filter::is_relevant_title(&c.title) && filter::is_article_url(&c.link))
        .collect();
    let kept = relevant.len();
    let selected = select_top(relevant);

    info!(
        target: "ingest",
        total,
        windowed,
        unique,
        kept,
        selected = selected.len(),
        "curation pass finished"
    );
    selected
}

/// Validate and time-window raw entries. An entry survives only with a
/// usable link (link field, falling back to guid) and a publication instant
/// no older than the lookback window.
pub fn normalize_entries(now: DateTime<Utc>, raw: Vec<RawEntry>) -> Vec<Candidate> {
    let cutoff = now - Duration::hours(LOOKBACK_HOURS);
    raw.into_iter()
        .filter_map(|entry| {
            let link = {
                let l = entry.link.trim();
                if l.is_empty() {
                    entry.guid.trim()
                } else {
                    l
                }
            };
            if link.is_empty() {
                return None;
            }
            let published_at = entry.published.or(entry.updated)?;
            if published_at < cutoff {
                return None;
            }
            Some(Candidate {
                title: entry.title.trim().to_string(),
                link: link.to_string(),
                published_at,
                source_label: entry.source_label.trim().to_string(),
            })
        })
        .collect()
}

/// Sort newest-first (stable, so equal timestamps keep input order) and keep
/// the first occurrence of each lowercase `(title, link)` key. Idempotent:
/// running it on an already-deduped set is a no-op.
pub fn dedup_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.dedup_key()))
        .collect()
}

/// Cap the list handed to the generation boundary, preserving newest-first
/// order. The external service narrows further; our contract ends at a
/// bounded, clean list.
pub fn select_top(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut out = candidates;
    out.truncate(MAX_CANDIDATES);
    out
}
