//! Category model for extracted policy facts
//!
//! Ten top-level categories. Three of them are split further into
//! sub-kinds; the sub-kind enums are declared in classifier priority order,
//! so their `Ord` is also their rendering order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PolicyIdentification,
    CompanyDetails,
    CoverageDetails,
    EligibilityCriteria,
    KeyBenefits,
    WaitingPeriods,
    KeyExclusions,
    SpecialFeatures,
    ClaimsProcess,
    ContactInfo,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 10] = [
        Category::PolicyIdentification,
        Category::CompanyDetails,
        Category::CoverageDetails,
        Category::EligibilityCriteria,
        Category::KeyBenefits,
        Category::WaitingPeriods,
        Category::KeyExclusions,
        Category::SpecialFeatures,
        Category::ClaimsProcess,
        Category::ContactInfo,
    ];

    /// Section heading used in the analysis report
    pub fn title(&self) -> &'static str {
        match self {
            Category::PolicyIdentification => "POLICY IDENTIFICATION",
            Category::CompanyDetails => "COMPANY DETAILS",
            Category::CoverageDetails => "COVERAGE DETAILS",
            Category::EligibilityCriteria => "ELIGIBILITY CRITERIA",
            Category::KeyBenefits => "KEY BENEFITS",
            Category::WaitingPeriods => "WAITING PERIODS",
            Category::KeyExclusions => "KEY EXCLUSIONS",
            Category::SpecialFeatures => "SPECIAL FEATURES",
            Category::ClaimsProcess => "CLAIMS PROCESS",
            Category::ContactInfo => "CONTACT INFORMATION",
        }
    }

    /// 1-based section number in the analysis report
    pub fn number(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// True if matches in this category are split into sub-kinds
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            Category::KeyBenefits | Category::KeyExclusions | Category::SpecialFeatures
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    Hospitalization,
    Treatment,
    Medical,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionKind {
    MedicalConditions,
    Treatments,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Discounts,
    AdditionalBenefits,
    SpecialFeatures,
}

/// Sub-category tag, only meaningful inside its owning category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Subcategory {
    Benefit(BenefitKind),
    Exclusion(ExclusionKind),
    Feature(FeatureKind),
}

impl Subcategory {
    pub fn category(&self) -> Category {
        match self {
            Subcategory::Benefit(_) => Category::KeyBenefits,
            Subcategory::Exclusion(_) => Category::KeyExclusions,
            Subcategory::Feature(_) => Category::SpecialFeatures,
        }
    }
}

/// A closed set of sub-kinds belonging to one classified category
pub trait SubKind: Copy + Ord + std::fmt::Debug + 'static {
    /// Every kind, in priority order
    const ALL: &'static [Self];

    /// The category these kinds subdivide
    const CATEGORY: Category;

    fn title(self) -> &'static str;

    fn into_subcategory(self) -> Subcategory;

    /// Recover the kind from a tag, if the tag belongs to this category
    fn from_subcategory(sub: Subcategory) -> Option<Self>;
}

impl SubKind for BenefitKind {
    const ALL: &'static [Self] = &[
        BenefitKind::Hospitalization,
        BenefitKind::Treatment,
        BenefitKind::Medical,
        BenefitKind::Other,
    ];
    const CATEGORY: Category = Category::KeyBenefits;

    fn title(self) -> &'static str {
        match self {
            BenefitKind::Hospitalization => "Hospitalization",
            BenefitKind::Treatment => "Treatment",
            BenefitKind::Medical => "Medical",
            BenefitKind::Other => "Other",
        }
    }

    fn into_subcategory(self) -> Subcategory {
        Subcategory::Benefit(self)
    }

    fn from_subcategory(sub: Subcategory) -> Option<Self> {
        match sub {
            Subcategory::Benefit(kind) => Some(kind),
            _ => None,
        }
    }
}

impl SubKind for ExclusionKind {
    const ALL: &'static [Self] = &[
        ExclusionKind::MedicalConditions,
        ExclusionKind::Treatments,
        ExclusionKind::General,
    ];
    const CATEGORY: Category = Category::KeyExclusions;

    fn title(self) -> &'static str {
        match self {
            ExclusionKind::MedicalConditions => "Medical Conditions",
            ExclusionKind::Treatments => "Treatments",
            ExclusionKind::General => "General",
        }
    }

    fn into_subcategory(self) -> Subcategory {
        Subcategory::Exclusion(self)
    }

    fn from_subcategory(sub: Subcategory) -> Option<Self> {
        match sub {
            Subcategory::Exclusion(kind) => Some(kind),
            _ => None,
        }
    }
}

impl SubKind for FeatureKind {
    const ALL: &'static [Self] = &[
        FeatureKind::Discounts,
        FeatureKind::AdditionalBenefits,
        FeatureKind::SpecialFeatures,
    ];
    const CATEGORY: Category = Category::SpecialFeatures;

    fn title(self) -> &'static str {
        match self {
            FeatureKind::Discounts => "Discounts",
            FeatureKind::AdditionalBenefits => "Additional Benefits",
            FeatureKind::SpecialFeatures => "Special Features",
        }
    }

    fn into_subcategory(self) -> Subcategory {
        Subcategory::Feature(self)
    }

    fn from_subcategory(sub: Subcategory) -> Option<Self> {
        match sub {
            Subcategory::Feature(kind) => Some(kind),
            _ => None,
        }
    }
}
