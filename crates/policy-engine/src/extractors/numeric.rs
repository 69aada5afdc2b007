// Numeric extraction utilities for sum-insured amounts
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::CoverageAmount;

lazy_static! {
    // Indian digit grouping ("5,00,000") as well as plain and decimal literals,
    // either leading the value or right after a rupee marker
    static ref AMOUNT_LITERAL: Regex =
        Regex::new(r"(?i)(?:^\s*|\bRs\.?\s*)(\d[\d,]*(?:\.\d+)?)").unwrap();
}

/// Pulls the rupee amounts out of a captured sum-insured value
///
/// Only the leading literal and literals written after `Rs.` count, so ages
/// and member counts in the same sentence are ignored. Separators are
/// stripped before parsing; literals that do not parse or are zero are
/// skipped.
pub fn parse_amounts(text: &str) -> Vec<CoverageAmount> {
    AMOUNT_LITERAL
        .captures_iter(text)
        .filter_map(|caps| {
            let literal = caps.get(1)?.as_str().trim_end_matches(',');
            let value = literal.replace(',', "").parse::<f64>().ok()?;
            (value > 0.0).then(|| CoverageAmount {
                value,
                text: literal.to_string(),
            })
        })
        .collect()
}

/// Sorts amounts descending, drops repeated values and keeps the top `cap`
///
/// The sort is stable, so among equal values the first one seen wins.
pub fn rank_amounts(mut amounts: Vec<CoverageAmount>, cap: usize) -> Vec<CoverageAmount> {
    amounts.sort_by(|a, b| b.value.total_cmp(&a.value));
    amounts.dedup_by(|next, kept| next.value == kept.value);
    amounts.truncate(cap);
    amounts
}
