//! Applies a pattern library to raw document text

use shared_types::{Category, PolicyMatch};
use tracing::debug;

use crate::patterns::{Capture, CompiledRule, PatternLibrary};

/// Runs every rule of a library over one document
pub struct Extractor<'a> {
    library: &'a PatternLibrary,
}

impl<'a> Extractor<'a> {
    pub fn new(library: &'a PatternLibrary) -> Self {
        Self { library }
    }

    /// Every match in category order, then rule order, then document order
    ///
    /// Occurrences of one rule never overlap; occurrences of different rules
    /// may. Nothing is filtered or deduplicated here.
    pub fn extract(&self, text: &str) -> Vec<PolicyMatch> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for category in Category::ALL {
            let before = matches.len();
            for rule in self.library.rules_for(category) {
                matches.extend(apply_rule(rule, text));
            }
            debug!("{:?}: {} raw matches", category, matches.len() - before);
        }
        matches
    }
}

fn apply_rule(rule: &CompiledRule, text: &str) -> Vec<PolicyMatch> {
    let spec = &rule.spec;
    let mut found = Vec::new();

    for caps in rule.regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let span_text = normalize_whitespace(whole.as_str());

        let captured_groups: Vec<String> = (1..caps.len())
            .map(|i| {
                caps.get(i)
                    .map(|g| normalize_whitespace(g.as_str()))
                    .unwrap_or_default()
            })
            .collect();

        let value = match spec.capture {
            Capture::Whole => span_text.clone(),
            Capture::Group(index) => captured_groups
                .get(index.wrapping_sub(1))
                .filter(|g| !g.is_empty())
                .cloned()
                .unwrap_or_else(|| span_text.clone()),
        };

        found.push(PolicyMatch {
            rule: spec.name.to_string(),
            category: spec.category,
            subcategory: spec.subcategory,
            span_text,
            captured_groups,
            value,
            numeric: spec.numeric,
        });
    }

    found
}

/// Collapse runs of whitespace (including line breaks) to single spaces
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
