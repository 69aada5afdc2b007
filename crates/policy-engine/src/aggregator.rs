//! Turns classified matches into a capped, deduplicated analysis result

use std::collections::HashSet;

use shared_types::{
    AnalysisResult, BenefitKind, Category, CoverageAmount, ExclusionKind, FeatureKind, PolicyMatch,
    SubKind,
};
use tracing::debug;

use crate::classifier::kind_of;
use crate::config::{Limits, MinLengths};
use crate::extractors::numeric::{parse_amounts, rank_amounts};
use crate::patterns::{RULE_GENERAL_EXCLUSIONS, RULE_STANDARD_EXCLUSIONS};

/// Build the analysis result from matches in extraction order
///
/// Per category, short values are dropped, then repeated spans (first one
/// kept), then each list is cut to its limit. Amounts and the general or
/// standard exclusion clauses are harvested before any filtering.
pub fn aggregate(
    matches: Vec<PolicyMatch>,
    limits: &Limits,
    min_lengths: &MinLengths,
) -> AnalysisResult {
    let mut result = AnalysisResult::default();
    let mut seen: HashSet<(Category, String)> = HashSet::new();
    let mut amounts: Vec<CoverageAmount> = Vec::new();

    for m in matches {
        if m.numeric {
            amounts.extend(parse_amounts(&m.value));
        }
        if m.rule == RULE_GENERAL_EXCLUSIONS || m.rule == RULE_STANDARD_EXCLUSIONS {
            let mut clause = m.clone();
            clause.subcategory = Some(ExclusionKind::General.into_subcategory());
            result.standard_exclusions.push(clause);
        }

        if m.value.trim().chars().count() < min_lengths.min_for(m.category) {
            continue;
        }

        if !seen.insert((m.category, m.span_text.trim().to_string())) {
            continue;
        }

        place(&mut result, m);
    }

    for category in Category::ALL {
        let cap = limits.cap_for(category);
        match category {
            Category::KeyBenefits => result.key_benefits.truncate_each(cap),
            Category::KeyExclusions => result.key_exclusions.truncate_each(cap),
            Category::SpecialFeatures => result.special_features.truncate_each(cap),
            other => {
                if let Some(items) = result.flat_mut(other) {
                    items.truncate(cap);
                }
            }
        }
        debug!("{:?}: {} matches kept", category, result.count(category));
    }

    result.standard_exclusions.truncate(limits.key_exclusions);
    result.coverage_amounts = rank_amounts(amounts, limits.coverage_amounts);
    debug!("{} coverage amounts kept", result.coverage_amounts.len());

    result
}

fn place(result: &mut AnalysisResult, mut m: PolicyMatch) {
    match m.category {
        Category::KeyBenefits => {
            let kind = kind_of::<BenefitKind>(&m);
            m.subcategory = Some(kind.into_subcategory());
            result.key_benefits.push(kind, m);
        }
        Category::KeyExclusions => {
            let kind = kind_of::<ExclusionKind>(&m);
            m.subcategory = Some(kind.into_subcategory());
            result.key_exclusions.push(kind, m);
        }
        Category::SpecialFeatures => {
            let kind = kind_of::<FeatureKind>(&m);
            m.subcategory = Some(kind.into_subcategory());
            result.special_features.push(kind, m);
        }
        other => {
            if let Some(items) = result.flat_mut(other) {
                items.push(m);
            }
        }
    }
}
