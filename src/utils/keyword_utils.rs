use regex::Regex;
use std::sync::LazyLock;

static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]+"|[^\s"]+"#).expect("keyword pattern is valid"));

/// Splits the space separated keyword string of a channel's branding
/// settings. Quoted phrases are kept together, without their quotes.
pub fn parse_keywords(keyword_str: &str) -> Vec<String> {
    KEYWORD
        .find_iter(keyword_str)
        .map(|m| m.as_str().trim_matches('"').to_string())
        .collect()
}
