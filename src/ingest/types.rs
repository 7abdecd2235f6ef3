// src/ingest/types.rs
use chrono::{DateTime, Utc};

/// One entry as returned by a single feed, before validation. Produced per
/// fetch and discarded after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    /// May be empty or malformed; the normalizer falls back to `guid`.
    pub link: String,
    pub guid: String,
    /// Primary publication instant; `None` when the feed omitted it or the
    /// parser could not make sense of it.
    pub published: Option<DateTime<Utc>>,
    /// Secondary instant (Atom `updated` and friends), used as fallback.
    pub updated: Option<DateTime<Utc>>,
    pub source_label: String,
}

/// The canonical unit flowing through the pipeline. Immutable after
/// construction: `link` is non-empty and `published_at` is always valid; the
/// pipeline only filters and reorders, never mutates fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
    pub source_label: String,
}

impl Candidate {
    /// Dedup key: lowercase `(title, link)` composite. Tolerates minor link
    /// variance across feeds better than link-only keying, at the cost of
    /// colliding two different articles that share an identical title.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.title.to_lowercase(), self.link.to_lowercase())
    }
}
