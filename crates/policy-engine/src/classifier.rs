//! Keyword classification of matches into sub-kinds

use shared_types::{BenefitKind, ExclusionKind, FeatureKind, PolicyMatch, SubKind};

use crate::patterns::{
    contains_any, BENEFIT_KEYWORDS, CONDITION_KEYWORDS, DISCOUNT_KEYWORDS, HOSPITAL_KEYWORDS,
    MEDICAL_KEYWORDS, PROCEDURE_KEYWORDS, TREATMENT_KEYWORDS,
};

/// Keyword heuristic for one family of sub-kinds
///
/// Rules are tried in order against the lower-cased value; the first kind
/// whose keywords appear wins and `FALLBACK` catches everything else, so
/// classification is total.
pub trait Classify: SubKind {
    const RULES: &'static [(Self, &'static [&'static str])];
    const FALLBACK: Self;

    fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self::RULES
            .iter()
            .find(|(_, keywords)| contains_any(&lowered, keywords))
            .map(|(kind, _)| *kind)
            .unwrap_or(Self::FALLBACK)
    }
}

impl Classify for BenefitKind {
    const RULES: &'static [(Self, &'static [&'static str])] = &[
        (BenefitKind::Hospitalization, HOSPITAL_KEYWORDS),
        (BenefitKind::Treatment, TREATMENT_KEYWORDS),
        (BenefitKind::Medical, MEDICAL_KEYWORDS),
    ];
    const FALLBACK: Self = BenefitKind::Other;
}

impl Classify for ExclusionKind {
    const RULES: &'static [(Self, &'static [&'static str])] = &[
        (ExclusionKind::MedicalConditions, CONDITION_KEYWORDS),
        (ExclusionKind::Treatments, PROCEDURE_KEYWORDS),
    ];
    const FALLBACK: Self = ExclusionKind::General;
}

impl Classify for FeatureKind {
    const RULES: &'static [(Self, &'static [&'static str])] = &[
        (FeatureKind::Discounts, DISCOUNT_KEYWORDS),
        (FeatureKind::AdditionalBenefits, BENEFIT_KEYWORDS),
    ];
    const FALLBACK: Self = FeatureKind::SpecialFeatures;
}

/// Sub-kind of a match: the rule's pinned tag if it has one, else the heuristic
pub fn kind_of<K: Classify>(m: &PolicyMatch) -> K {
    m.subcategory
        .and_then(K::from_subcategory)
        .unwrap_or_else(|| K::classify(&m.value))
}
