//! Extraction output: individual matches and the per-document analysis result

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{BenefitKind, Category, ExclusionKind, FeatureKind, SubKind, Subcategory};

/// One occurrence of a pattern rule in the document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMatch {
    pub rule: String,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub span_text: String,
    pub captured_groups: Vec<String>, // Group 1.. in order, "" for groups that did not take part
    pub value: String,                // Semantic value per the rule's capture contract
    pub numeric: bool,                // Value carries sum-insured amounts
}

impl PolicyMatch {
    /// Capture group by regex index (1-based); `None` when absent or blank
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.captured_groups.get(i))
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
    }
}

/// A sum-insured amount harvested from coverage matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageAmount {
    pub value: f64,
    pub text: String, // Literal as written in the document, e.g. "5,00,000"
}

/// Matches of one classified category, split by sub-kind
///
/// Every kind has an entry (possibly empty); iteration follows the kind's
/// priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize",
    deserialize = "K: Deserialize<'de> + Ord"
))]
pub struct CategoryBucket<K> {
    entries: BTreeMap<K, Vec<PolicyMatch>>,
}

impl<K: SubKind> CategoryBucket<K> {
    pub fn new() -> Self {
        Self {
            entries: K::ALL.iter().map(|k| (*k, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, kind: K, item: PolicyMatch) {
        self.entries.entry(kind).or_default().push(item);
    }

    pub fn get(&self, kind: K) -> &[PolicyMatch] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keep only the first `cap` matches of every kind
    pub fn truncate_each(&mut self, cap: usize) {
        for items in self.entries.values_mut() {
            items.truncate(cap);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &[PolicyMatch])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// All matches, kind by kind
    pub fn flatten(&self) -> impl Iterator<Item = &PolicyMatch> {
        self.entries.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: SubKind> Default for CategoryBucket<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured extraction result for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub policy_identification: Vec<PolicyMatch>,
    pub company_details: Vec<PolicyMatch>,
    pub coverage_details: Vec<PolicyMatch>,
    pub coverage_amounts: Vec<CoverageAmount>, // Descending by value
    pub eligibility_criteria: Vec<PolicyMatch>,
    pub key_benefits: CategoryBucket<BenefitKind>,
    pub waiting_periods: Vec<PolicyMatch>,
    pub key_exclusions: CategoryBucket<ExclusionKind>,
    pub special_features: CategoryBucket<FeatureKind>,
    pub claims_process: Vec<PolicyMatch>,
    pub contact_info: Vec<PolicyMatch>,
    /// General and standard exclusion clauses in document order, exempt from
    /// the exclusion length filter and dedup
    #[serde(default)]
    pub standard_exclusions: Vec<PolicyMatch>,
}

impl AnalysisResult {
    /// Flat list for an unclassified category; `None` for classified ones
    pub fn flat(&self, category: Category) -> Option<&[PolicyMatch]> {
        let items = match category {
            Category::PolicyIdentification => &self.policy_identification,
            Category::CompanyDetails => &self.company_details,
            Category::CoverageDetails => &self.coverage_details,
            Category::EligibilityCriteria => &self.eligibility_criteria,
            Category::WaitingPeriods => &self.waiting_periods,
            Category::ClaimsProcess => &self.claims_process,
            Category::ContactInfo => &self.contact_info,
            Category::KeyBenefits | Category::KeyExclusions | Category::SpecialFeatures => {
                return None
            }
        };
        Some(items.as_slice())
    }

    pub fn flat_mut(&mut self, category: Category) -> Option<&mut Vec<PolicyMatch>> {
        let items = match category {
            Category::PolicyIdentification => &mut self.policy_identification,
            Category::CompanyDetails => &mut self.company_details,
            Category::CoverageDetails => &mut self.coverage_details,
            Category::EligibilityCriteria => &mut self.eligibility_criteria,
            Category::WaitingPeriods => &mut self.waiting_periods,
            Category::ClaimsProcess => &mut self.claims_process,
            Category::ContactInfo => &mut self.contact_info,
            Category::KeyBenefits | Category::KeyExclusions | Category::SpecialFeatures => {
                return None
            }
        };
        Some(items)
    }

    /// Every match of a category, classified ones flattened kind by kind
    pub fn matches(&self, category: Category) -> Vec<&PolicyMatch> {
        match category {
            Category::KeyBenefits => self.key_benefits.flatten().collect(),
            Category::KeyExclusions => self.key_exclusions.flatten().collect(),
            Category::SpecialFeatures => self.special_features.flatten().collect(),
            other => self
                .flat(other)
                .map(|items| items.iter().collect())
                .unwrap_or_default(),
        }
    }

    /// Matches of a category produced by one named rule
    pub fn by_rule(&self, category: Category, rule: &str) -> Vec<&PolicyMatch> {
        self.matches(category)
            .into_iter()
            .filter(|m| m.rule == rule)
            .collect()
    }

    pub fn count(&self, category: Category) -> usize {
        self.matches(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.coverage_amounts.is_empty()
            && self.standard_exclusions.is_empty()
            && Category::ALL.iter().all(|c| self.count(*c) == 0)
    }
}
