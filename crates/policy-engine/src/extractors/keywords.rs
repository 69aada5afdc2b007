// Keyword frequency counting for the visualization feed
use shared_types::KeywordCount;

/// Counts whole-word, case-insensitive occurrences of each keyword
///
/// Words are runs of alphanumerics and underscores, so "policy" does not
/// count inside "policyholder". Keywords come back in the order given.
pub fn count_keywords(text: &str, keywords: &[&str]) -> Vec<KeywordCount> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect();

    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.to_lowercase();
            KeywordCount {
                count: words.iter().filter(|w| **w == keyword).count(),
                keyword,
            }
        })
        .collect()
}
