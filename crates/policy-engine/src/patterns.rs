//! Pattern library: the extraction rules and classifier keyword tables
//!
//! The rule table is plain data. [`PatternLibrary`] compiles a table once
//! and is then shared read-only; substitute a different table with
//! [`PatternLibrary::new`] to narrow or widen what gets extracted.

use regex::{Regex, RegexBuilder};
use shared_types::{BenefitKind, Category, ExclusionKind, FeatureKind, Subcategory};

use crate::error::{PolicyError, Result};

/// Benefit keywords, checked in this order
pub const HOSPITAL_KEYWORDS: &[&str] = &["hospital"];
pub const TREATMENT_KEYWORDS: &[&str] = &["treatment"];
pub const MEDICAL_KEYWORDS: &[&str] = &["medical"];

/// Exclusion keywords, checked in this order
pub const CONDITION_KEYWORDS: &[&str] = &["disease", "condition", "illness"];
pub const PROCEDURE_KEYWORDS: &[&str] = &["treatment", "procedure", "surgery"];

/// Feature keywords, checked in this order
pub const DISCOUNT_KEYWORDS: &[&str] = &["discount"];
pub const BENEFIT_KEYWORDS: &[&str] = &["benefit"];

/// Words counted in the summary for the visualization feed
pub const VISUALIZATION_KEYWORDS: &[&str] = &[
    "covers",
    "benefits",
    "exclusions",
    "limitations",
    "must",
    "required",
    "eligible",
    "maximum",
    "premium",
    "insure",
    "policy",
    "claim",
];

// Rules the simplified summary reads by name
pub const RULE_POLICY_NUMBER: &str = "policy_number";
pub const RULE_PREMIUM_DETAILS: &str = "premium_details";
pub const RULE_GRACE_PERIOD: &str = "grace_period";
pub const RULE_INSURER: &str = "insurer";
pub const RULE_CIN: &str = "cin";
pub const RULE_REGISTERED_OFFICE: &str = "registered_office";
pub const RULE_SUM_INSURED: &str = "sum_insured";
pub const RULE_COVERAGE_LIMIT: &str = "coverage_limit";
pub const RULE_BENEFITS_INCLUDE: &str = "benefits_include";
pub const RULE_GENERAL_EXCLUSIONS: &str = "general_exclusions";
pub const RULE_STANDARD_EXCLUSIONS: &str = "standard_exclusions";
pub const RULE_REQUIRED_DOCUMENTS: &str = "required_documents";
pub const RULE_TOLL_FREE: &str = "toll_free";
pub const RULE_EMAIL: &str = "email";
pub const RULE_WEBSITE: &str = "website";

/// True if the (already lower-cased) text contains any keyword
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

/// Which part of a match carries the semantic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Whole,
    Group(usize),
}

/// One extraction rule
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub name: &'static str,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub pattern: &'static str,
    pub capture: Capture,
    pub case_insensitive: bool,
    /// Value holds sum-insured amounts to harvest
    pub numeric: bool,
}

impl RuleSpec {
    pub const fn new(name: &'static str, category: Category, pattern: &'static str) -> Self {
        Self {
            name,
            category,
            subcategory: None,
            pattern,
            capture: Capture::Group(1),
            case_insensitive: false,
            numeric: false,
        }
    }

    pub const fn pinned(self, subcategory: Subcategory) -> Self {
        Self {
            subcategory: Some(subcategory),
            ..self
        }
    }

    pub const fn whole(self) -> Self {
        Self {
            capture: Capture::Whole,
            ..self
        }
    }

    pub const fn ignore_case(self) -> Self {
        Self {
            case_insensitive: true,
            ..self
        }
    }

    pub const fn numeric(self) -> Self {
        Self {
            numeric: true,
            ..self
        }
    }
}

use Category::*;

const HOSPITALIZATION: Subcategory = Subcategory::Benefit(BenefitKind::Hospitalization);
const TREATMENT: Subcategory = Subcategory::Benefit(BenefitKind::Treatment);
const MEDICAL: Subcategory = Subcategory::Benefit(BenefitKind::Medical);
const OTHER_BENEFIT: Subcategory = Subcategory::Benefit(BenefitKind::Other);
const CONDITIONS: Subcategory = Subcategory::Exclusion(ExclusionKind::MedicalConditions);
const TREATMENTS: Subcategory = Subcategory::Exclusion(ExclusionKind::Treatments);
const GENERAL: Subcategory = Subcategory::Exclusion(ExclusionKind::General);
const DISCOUNTS: Subcategory = Subcategory::Feature(FeatureKind::Discounts);
const ADDITIONAL: Subcategory = Subcategory::Feature(FeatureKind::AdditionalBenefits);
const FEATURES: Subcategory = Subcategory::Feature(FeatureKind::SpecialFeatures);

/// The built-in rule set, grouped by category in report order
pub const STANDARD_RULES: &[RuleSpec] = &[
    // Policy identification
    RuleSpec::new(
        RULE_POLICY_NUMBER,
        PolicyIdentification,
        r"Policy\s+(?:Number|No\.?|ID)\s*:?\s*([A-Z0-9][A-Z0-9/-]*)",
    ),
    RuleSpec::new("policy_type", PolicyIdentification, r"Policy\s+Type\s*:?\s*([A-Za-z ]+)"),
    RuleSpec::new(
        "policy_period",
        PolicyIdentification,
        r"Policy\s+Period\s*:?\s*([A-Za-z0-9 ,/-]+)",
    ),
    RuleSpec::new(
        RULE_PREMIUM_DETAILS,
        PolicyIdentification,
        r"Premium\s+(?:[Dd]etails?|[Ii]nformation)\s*:?\s*([^.]+)",
    ),
    RuleSpec::new(RULE_GRACE_PERIOD, PolicyIdentification, r"Grace\s+[Pp]eriod\s*:?\s*([^.]+)"),
    // Company details
    RuleSpec::new(
        RULE_INSURER,
        CompanyDetails,
        r"([A-Za-z ]+(?:Limited|Ltd\.?))\s*(?:IRDAI\s+Reg(?:n|istration)?\.?\s*No\.?\s*:?\s*(\d+))?",
    ),
    RuleSpec::new(RULE_CIN, CompanyDetails, r"\bCIN\s*:?\s*([A-Z0-9]+)"),
    RuleSpec::new(
        RULE_REGISTERED_OFFICE,
        CompanyDetails,
        r"(?:Registered|Corporate)\s+(?:&\s+)?Office\s*:?\s*([^.]+)",
    ),
    // Coverage details
    RuleSpec::new(
        RULE_SUM_INSURED,
        CoverageDetails,
        r"Sum\s+Insured\s*(?:range|options|from|of|is)?\s*:?\s*Rs\.?\s*((?:\bRs\.|\.\d|[^.])+)",
    )
    .ignore_case()
    .numeric(),
    RuleSpec::new("coverage_for", CoverageDetails, r"Coverage\s+for\s+([^.]+)"),
    RuleSpec::new("additional_coverage", CoverageDetails, r"Additional\s+Coverage\s+([^.]+)"),
    RuleSpec::new(
        RULE_COVERAGE_LIMIT,
        CoverageDetails,
        r"(?:Limit|Cap|Maximum)\s+(?:for|on)\s+([^.]+)",
    ),
    // Eligibility
    RuleSpec::new(
        "eligibility_criteria",
        EligibilityCriteria,
        r"Eligibility\s+Criteria\s*:?\s*([^.]+)",
    ),
    RuleSpec::new("age_limit", EligibilityCriteria, r"Age\s+Limit\s*:?\s*([^.]+)"),
    RuleSpec::new(
        "entry_documents",
        EligibilityCriteria,
        r"Required\s+Documents\s*:?\s*([^.]+)",
    ),
    RuleSpec::new(
        "eligible_for",
        EligibilityCriteria,
        r"(?:eligible|qualify)\s+for\s+([^.]+?)(?:\.|\band\b|$)",
    ),
    // Key benefits
    RuleSpec::new(
        "hospitalization_benefits",
        KeyBenefits,
        r"Hospitali[sz]ation\s+benefits\s+([^.]+)",
    )
    .pinned(HOSPITALIZATION),
    RuleSpec::new("in_patient_care", KeyBenefits, r"In-patient\s+care\s+([^.]+)")
        .pinned(HOSPITALIZATION),
    RuleSpec::new("room_charges", KeyBenefits, r"Room\s+charges\s+([^.]+)").pinned(HOSPITALIZATION),
    RuleSpec::new("treatment_benefits", KeyBenefits, r"Treatment\s+benefits\s+([^.]+)")
        .pinned(TREATMENT),
    RuleSpec::new("surgical_procedures", KeyBenefits, r"Surgical\s+procedures\s+([^.]+)")
        .pinned(TREATMENT),
    RuleSpec::new("day_care", KeyBenefits, r"Day\s+care\s+treatments\s+([^.]+)").pinned(TREATMENT),
    RuleSpec::new("medical_expenses", KeyBenefits, r"Medical\s+expenses\s+([^.]+)").pinned(MEDICAL),
    RuleSpec::new("medicine_costs", KeyBenefits, r"Medicine\s+costs\s+([^.]+)").pinned(MEDICAL),
    RuleSpec::new("diagnostic_tests", KeyBenefits, r"Diagnostic\s+tests\s+([^.]+)").pinned(MEDICAL),
    RuleSpec::new("special_benefits", KeyBenefits, r"Special\s+benefits\s+([^.]+)")
        .pinned(OTHER_BENEFIT),
    RuleSpec::new(
        RULE_BENEFITS_INCLUDE,
        KeyBenefits,
        r"(?:Benefits?|Coverage)\s+includes?\s*:?\s*([^.]+)",
    ),
    RuleSpec::new(
        "expenses_covered",
        KeyBenefits,
        r"[Tt]reatment\s+(?:for|of)\s+([^.]+?)(?:\.|\band\b|$)",
    ),
    // Waiting periods
    RuleSpec::new("waiting_period", WaitingPeriods, r"Waiting\s+[Pp]eriod\s*:?\s*([^.]+)"),
    RuleSpec::new(
        "initial_waiting_period",
        WaitingPeriods,
        r"Initial\s+waiting\s+period\s+([^.]+)",
    ),
    RuleSpec::new(
        "ped_waiting_period",
        WaitingPeriods,
        r"Pre-existing\s+disease\s+waiting\s+period\s+([^.]+)",
    ),
    RuleSpec::new("cooling_period", WaitingPeriods, r"Cooling\s+[Pp]eriod\s*:?\s*([^.]+)"),
    // Key exclusions
    RuleSpec::new("pre_existing_diseases", KeyExclusions, r"Pre-existing\s+diseases\s+([^.]+)")
        .pinned(CONDITIONS),
    RuleSpec::new("chronic_conditions", KeyExclusions, r"Chronic\s+conditions\s+([^.]+)")
        .pinned(CONDITIONS),
    RuleSpec::new("genetic_disorders", KeyExclusions, r"Genetic\s+disorders\s+([^.]+)")
        .pinned(CONDITIONS),
    RuleSpec::new("excluded_treatments", KeyExclusions, r"Excluded\s+treatments\s+([^.]+)")
        .pinned(TREATMENTS),
    RuleSpec::new(
        "non_covered_procedures",
        KeyExclusions,
        r"Non-covered\s+procedures\s+([^.]+)",
    )
    .pinned(TREATMENTS),
    RuleSpec::new(
        "experimental_treatments",
        KeyExclusions,
        r"Experimental\s+treatments\s+([^.]+)",
    )
    .pinned(TREATMENTS),
    RuleSpec::new(
        RULE_GENERAL_EXCLUSIONS,
        KeyExclusions,
        r"General\s+[Ee]xclusions?\s*:?\s*([^.]+)",
    )
    .pinned(GENERAL),
    RuleSpec::new(
        RULE_STANDARD_EXCLUSIONS,
        KeyExclusions,
        r"Standard\s+[Ee]xclusions?\s*:?\s*([^.]+)",
    )
    .pinned(GENERAL),
    RuleSpec::new("common_exclusions", KeyExclusions, r"Common\s+exclusions\s+([^.]+)")
        .pinned(GENERAL),
    RuleSpec::new(
        "not_covered",
        KeyExclusions,
        r"\bnot\s+covered\b\s*:?\s*([^.]*(?:condition|disease|illness|treatment|procedure|surgery)[^.]*)",
    )
    .ignore_case(),
    // Special features
    RuleSpec::new("premium_discounts", SpecialFeatures, r"Premium\s+discounts\s+([^.]+)")
        .pinned(DISCOUNTS),
    RuleSpec::new("special_discounts", SpecialFeatures, r"Special\s+discounts\s+([^.]+)")
        .pinned(DISCOUNTS),
    RuleSpec::new("group_discounts", SpecialFeatures, r"Group\s+discounts\s+([^.]+)")
        .pinned(DISCOUNTS),
    RuleSpec::new("additional_benefits", SpecialFeatures, r"Additional\s+benefits\s+([^.]+)")
        .pinned(ADDITIONAL),
    RuleSpec::new("extra_features", SpecialFeatures, r"Extra\s+features\s+([^.]+)")
        .pinned(ADDITIONAL),
    RuleSpec::new(
        "value_added_services",
        SpecialFeatures,
        r"Value\s+added\s+services\s+([^.]+)",
    )
    .pinned(ADDITIONAL),
    RuleSpec::new("special_features", SpecialFeatures, r"Special\s+features\s+([^.]+)")
        .pinned(FEATURES),
    RuleSpec::new("unique_benefits", SpecialFeatures, r"Unique\s+benefits\s+([^.]+)")
        .pinned(FEATURES),
    RuleSpec::new("exclusive_features", SpecialFeatures, r"Exclusive\s+features\s+([^.]+)")
        .pinned(FEATURES),
    RuleSpec::new(
        "feature_highlights",
        SpecialFeatures,
        r"Features?\s*:\s*([^.]*(?:discount|bonus|benefit)[^.]*)",
    ),
    RuleSpec::new("no_claim_bonus", SpecialFeatures, r"\bno[\s-]+claims?\s+bonus\b[^.]*")
        .whole()
        .ignore_case(),
    // Claims process
    RuleSpec::new("claims_process", ClaimsProcess, r"Claims?\s+[Pp]rocess\s*:?\s*([^.]+)"),
    RuleSpec::new(
        "how_to_claim",
        ClaimsProcess,
        r"How\s+to\s+(?:file|make|lodge)\s+a\s+claim\s*:?\s*([^.]+)",
    ),
    RuleSpec::new(
        RULE_REQUIRED_DOCUMENTS,
        ClaimsProcess,
        r"(?:Required|Necessary)\s+documents?\s+(?:for|to)\s+([^.]+)",
    ),
    // Contact information
    RuleSpec::new("contact_number", ContactInfo, r"Contact\s+number\s*:?\s*([^.]+)"),
    RuleSpec::new(
        RULE_TOLL_FREE,
        ContactInfo,
        r"(?:Toll[\s-]+Free(?:\s+(?:number|no\.?))?|Helpline)\s*:?\s*(\d[\d\s-]*\d)",
    )
    .ignore_case(),
    RuleSpec::new(
        RULE_EMAIL,
        ContactInfo,
        r"E-?mail(?:\s+(?:address|id))?\s*:?\s*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})",
    )
    .ignore_case(),
    RuleSpec::new(
        RULE_WEBSITE,
        ContactInfo,
        r"(?:Website|Visit)\s*:?\s*((?:https?://)?www\.[A-Za-z0-9.-]*[A-Za-z0-9])",
    )
    .ignore_case(),
];

/// A rule together with its compiled regex
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub spec: RuleSpec,
    pub regex: Regex,
}

/// Immutable set of compiled extraction rules
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    rules: Vec<CompiledRule>,
}

impl PatternLibrary {
    /// Compile a rule table; fails on the first invalid pattern
    pub fn new(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| {
                RegexBuilder::new(spec.pattern)
                    .case_insensitive(spec.case_insensitive)
                    .build()
                    .map(|regex| CompiledRule { spec: *spec, regex })
                    .map_err(|source| PolicyError::InvalidPattern {
                        rule: spec.name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// The built-in rule set
    pub fn standard() -> Result<Self> {
        Self::new(STANDARD_RULES)
    }

    /// Rules of one category, in declared order
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &CompiledRule> {
        self.rules
            .iter()
            .filter(move |rule| rule.spec.category == category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
