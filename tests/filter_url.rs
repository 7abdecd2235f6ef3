// tests/filter_url.rs
use ai_news_digest::filter::is_article_url;

#[test]
fn known_bad_hosts_are_rejected_regardless_of_path() {
    assert!(!is_article_url("https://www.google.com/search?q=ai"));
    assert!(!is_article_url("https://www.google.com/2024/05/10/looks-like-article/"));
    assert!(!is_article_url("https://example.com/2024/05/10/placeholder-article/"));
    assert!(!is_article_url("https://example.com/123456"));
}

#[test]
fn date_segment_paths_are_accepted() {
    assert!(is_article_url("https://technews.tw/2024/05/10/some-ai-story/"));
    assert!(is_article_url("https://blog.a.example/2023/12/01/year-end"));
}

#[test]
fn bare_roots_and_section_pages_are_rejected() {
    assert!(!is_article_url("https://technews.tw/"));
    assert!(!is_article_url("https://technews.tw"));
    assert!(!is_article_url("https://a.example/news/"));
    assert!(!is_article_url("https://a.example/tag/ai"));
}

#[test]
fn numeric_article_ids_are_accepted() {
    assert!(is_article_url("https://www.ithome.com.tw/news/165432"));
    assert!(is_article_url("https://36kr.com/p/2791234567"));
}

#[test]
fn long_slugs_are_accepted_short_ones_are_not() {
    assert!(is_article_url("https://a.example/posts/openai-releases-new-model"));
    assert!(!is_article_url("https://a.example/posts/short"));
}

#[test]
fn malformed_or_non_http_links_are_rejected() {
    assert!(!is_article_url("not a url"));
    assert!(!is_article_url("/2024/05/10/relative-path/"));
    assert!(!is_article_url("ftp://a.example/2024/05/10/story/"));
    assert!(!is_article_url("mailto:news@a.example"));
}

#[test]
fn uppercase_slug_does_not_count() {
    // Slug heuristic is lowercase-only; mixed case usually means a tracking
    // token or share link rather than an article slug.
    assert!(!is_article_url("https://a.example/Posts/Some-Long-Mixed-Case"));
}
