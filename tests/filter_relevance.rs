// tests/filter_relevance.rs
use ai_news_digest::filter::is_relevant_title;

#[test]
fn vendor_names_match() {
    assert!(is_relevant_title("OpenAI releases new developer tools"));
    assert!(is_relevant_title("Anthropic expands Claude availability"));
    assert!(is_relevant_title("輝達與 NVIDIA 合作夥伴發表新晶片"));
}

#[test]
fn chinese_keywords_match_by_containment() {
    assert!(is_relevant_title("人工智慧將改變醫療產業"));
    assert!(is_relevant_title("大模型落地:三個案例"));
    assert!(is_relevant_title("生成式工具進入辦公室"));
}

#[test]
fn latin_keyword_adjacent_to_cjk_still_matches() {
    // No whitespace between the vendor name and the ideographs.
    assert!(is_relevant_title("OpenAI發布GPT-5"));
    assert!(is_relevant_title("微軟將Copilot整合進Windows"));
}

#[test]
fn short_keywords_are_token_scoped() {
    assert!(is_relevant_title("AI chips are selling fast"));
    assert!(is_relevant_title("The AI-first startup playbook"));
    // "ai" inside ordinary words must not fire.
    assert!(!is_relevant_title("How to maintain your garden"));
    assert!(!is_relevant_title("Air travel rebounds in Asia"));
    assert!(!is_relevant_title("Thailand announces new visa rules"));
}

#[test]
fn off_topic_titles_are_rejected() {
    assert!(!is_relevant_title("Quarterly smartphone shipments dip"));
    assert!(!is_relevant_title("新款電動車上市"));
    assert!(!is_relevant_title(""));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(is_relevant_title("CHATGPT usage doubles"));
    assert!(is_relevant_title("machine LEARNING in production"));
}
