// tests/ingest_normalize.rs
use ai_news_digest::ingest::normalize_entries;
use ai_news_digest::ingest::types::RawEntry;
use chrono::{DateTime, Duration, Utc};

fn now() -> DateTime<Utc> {
    "2024-05-10T12:00:00Z".parse().unwrap()
}

fn entry(link: &str, published: Option<DateTime<Utc>>) -> RawEntry {
    RawEntry {
        title: " OpenAI ships a new model ".into(),
        link: link.into(),
        guid: String::new(),
        published,
        updated: None,
        source_label: " TechNews ".into(),
    }
}

#[test]
fn absent_timestamp_is_discarded() {
    let out = normalize_entries(now(), vec![entry("https://a.example/x", None)]);
    assert!(out.is_empty());
}

#[test]
fn entries_older_than_lookback_are_discarded() {
    let fresh = entry("https://a.example/fresh", Some(now() - Duration::hours(2)));
    let stale = entry("https://a.example/stale", Some(now() - Duration::hours(25)));
    let out = normalize_entries(now(), vec![fresh, stale]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].link, "https://a.example/fresh");
}

#[test]
fn entry_exactly_at_cutoff_survives() {
    // Only instants strictly earlier than now - 24h are excluded.
    let boundary = entry("https://a.example/b", Some(now() - Duration::hours(24)));
    let out = normalize_entries(now(), vec![boundary]);
    assert_eq!(out.len(), 1);
}

#[test]
fn blank_link_falls_back_to_guid() {
    let mut e = entry("   ", Some(now()));
    e.guid = " https://a.example/guid-link ".into();
    let out = normalize_entries(now(), vec![e]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].link, "https://a.example/guid-link");
}

#[test]
fn blank_link_and_guid_is_discarded() {
    let mut e = entry("", Some(now()));
    e.guid = "  ".into();
    assert!(normalize_entries(now(), vec![e]).is_empty());
}

#[test]
fn updated_is_used_when_published_missing() {
    let mut e = entry("https://a.example/x", None);
    e.updated = Some(now() - Duration::hours(1));
    let out = normalize_entries(now(), vec![e]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].published_at, now() - Duration::hours(1));
}

#[test]
fn fields_are_trimmed() {
    let out = normalize_entries(now(), vec![entry("https://a.example/x", Some(now()))]);
    assert_eq!(out[0].title, "OpenAI ships a new model");
    assert_eq!(out[0].source_label, "TechNews");
}
