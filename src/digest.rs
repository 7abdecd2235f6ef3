// src/digest.rs
//! Digest request builder: renders the final candidate list into the strict
//! instruction payload for the generation service, and owns the fixed
//! fallback notice used when nothing survives curation.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use std::fmt::Write as _;
use tracing::{info, warn};

use crate::generate::DigestGenerator;
use crate::ingest::types::Candidate;
use crate::notify::Notifier;

/// Digest dates are rendered for a single fixed locale (zh-TW, UTC+8).
const DISPLAY_OFFSET_HOURS: i32 = 8;

pub fn date_heading(now: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_HOURS * 3600).expect("fixed display offset");
    now.with_timezone(&offset).format("%Y年%m月%d日").to_string()
}

/// Render the candidate list plus the output contract the external service
/// must follow. The contract is specified here but enforced only by the
/// collaborator: 5–8 numbered single-sentence entries, each tagged, each
/// followed by its literal source URL, blank line between entries, nothing
/// referenced from outside the list.
pub fn build_prompt(now: DateTime<Utc>, candidates: &[Candidate]) -> String {
    let mut listing = String::new();
    for (i, c) in candidates.iter().enumerate() {
        let _ = writeln!(listing, "{}. {}", i + 1, c.title);
        let _ = writeln!(listing, "   {}", c.link);
    }

    format!(
        "你是一名科技新聞編輯。以下是過去 24 小時內蒐集到的 AI 相關新聞候選清單:\n\n\
         {listing}\n\
         請從清單中挑選 5 到 8 則最重要的新聞,輸出一份每日 AI 新聞摘要,並嚴格遵守以下格式:\n\
         - 第一行為標題:「{heading} AI 新聞日報」\n\
         - 每則新聞為一段:編號、一個簡短的【主題標籤】、一句 30 到 60 字的摘要\n\
         - 摘要的下一行必須附上該則新聞在清單中的原始連結,連結需逐字保留\n\
         - 每則新聞之間空一行\n\
         - 只能引用上面清單中的新聞與連結,不得提及清單以外的任何內容",
        heading = date_heading(now),
    )
}

/// Fixed notice delivered through the normal channel when zero candidates
/// survive filtering. This is a first-class outcome, not an error.
pub fn fallback_notice(now: DateTime<Utc>) -> String {
    format!(
        "{} AI 新聞日報\n\n今日暫無合適的 AI 新聞候選,請稍後再試。",
        date_heading(now)
    )
}

/// Final leg of the run: empty candidate set short-circuits straight to the
/// fallback notice without touching the generation service; otherwise the
/// digest is generated and pushed. Generation and delivery failures are fatal
/// for the run and bubble up to the caller.
pub async fn compose_and_deliver(
    now: DateTime<Utc>,
    candidates: &[Candidate],
    generator: &dyn DigestGenerator,
    notifier: &dyn Notifier,
) -> Result<()> {
    if candidates.is_empty() {
        warn!("no candidates survived curation, delivering fallback notice");
        notifier.send(&fallback_notice(now)).await?;
        return Ok(());
    }

    let prompt = build_prompt(now, candidates);
    let digest = generator.generate(&prompt).await?;
    notifier.send(&digest).await?;
    info!(candidates = candidates.len(), "digest delivered");
    Ok(())
}
