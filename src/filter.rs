// src/filter.rs
//! Relevance and URL-quality gates. Both are pure predicates over plain
//! strings, with their keyword and pattern sets kept as data so they can be
//! extended and tested without touching pipeline control flow.
//!
//! Candidates failing either gate are dropped silently; that is routine
//! filtering, not an error condition.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Latin-script AI keywords, matched token-scoped and case-insensitively.
const LATIN_KEYWORDS: &[&str] = &[
    "ai",
    "llm",
    "gpt",
    "chatgpt",
    "openai",
    "anthropic",
    "claude",
    "gemini",
    "deepseek",
    "llama",
    "mistral",
    "copilot",
    "midjourney",
    "stable diffusion",
    "nvidia",
    "machine learning",
    "deep learning",
    "neural network",
    "generative",
];

/// CJK AI keywords, matched by containment (no word boundaries in CJK text).
const CJK_KEYWORDS: &[&str] = &[
    "人工智慧",
    "人工智能",
    "大模型",
    "大型語言模型",
    "大语言模型",
    "生成式",
    "機器學習",
    "机器学习",
    "深度學習",
    "深度学习",
    "語言模型",
    "语言模型",
];

// Token boundary is "not adjacent to another ASCII letter/digit", rather than
// regex \b: CJK ideographs are Unicode word characters, so \b would refuse to
// match "openai" inside "OpenAI發布". With this class the CJK neighbor counts
// as a boundary while "maintain" still cannot produce an "ai" hit.
static LATIN_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = LATIN_KEYWORDS
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)(?:^|[^a-z0-9])(?:{alternation})(?:[^a-z0-9]|$)"
    ))
    .unwrap()
});

/// Topical relevance: does the title mention the AI domain at all? Only the
/// title is checked; body text is unavailable at this stage.
pub fn is_relevant_title(title: &str) -> bool {
    LATIN_RE.is_match(title) || CJK_KEYWORDS.iter().any(|k| title.contains(k))
}

/// Hosts that never address a single published article: search-engine roots
/// and documentation placeholder domains. Checked before any path heuristic.
const BAD_HOSTS: &[&str] = &[
    "google.com",
    "www.google.com",
    "bing.com",
    "www.bing.com",
    "baidu.com",
    "www.baidu.com",
    "example.com",
    "www.example.com",
    "example.org",
    "www.example.org",
];

static DATE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d{4}/\d{2}/\d{2}(?:/|$)").unwrap());

/// Heuristic "looks like a single article" gate. The link must be an absolute
/// http(s) URL on an allowed host, and its path must show one of the shapes
/// articles actually have: a `/YYYY/MM/DD/` date segment, a purely numeric
/// CMS article id, or a long lowercase slug. Everything else (homepages,
/// search pages, demo links) is rejected: a wrong URL delivered to the end
/// user has no recovery step downstream, so precision beats recall here.
pub fn is_article_url(link: &str) -> bool {
    let Ok(parsed) = Url::parse(link) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = parsed.host_str() else {
        return false;
    };
    if BAD_HOSTS.contains(&host.to_ascii_lowercase().as_str()) {
        return false;
    }

    let path = parsed.path();
    if DATE_PATH_RE.is_match(path) {
        return true;
    }
    parsed
        .path_segments()
        .map(|mut segments| segments.any(|s| is_numeric_id(s) || is_article_slug(s)))
        .unwrap_or(false)
}

/// Common CMS pattern: an all-digit article id segment.
fn is_numeric_id(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Slug heuristic: length >= 11 over lowercase letters, digits and hyphens.
fn is_article_slug(segment: &str) -> bool {
    segment.len() >= 11
        && segment
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
