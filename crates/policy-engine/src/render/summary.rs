//! Simplified summary: a fixed seven-section outline for policyholders

use shared_types::{AnalysisResult, Category};

use super::template::{Layout, SectionTemplate, Slot};
use super::{Renderer, SUMMARY_ARTIFACT};
use crate::config::SummaryProfile;
use crate::patterns::{
    RULE_BENEFITS_INCLUDE, RULE_CIN, RULE_COVERAGE_LIMIT, RULE_EMAIL, RULE_GRACE_PERIOD,
    RULE_INSURER, RULE_PREMIUM_DETAILS, RULE_REGISTERED_OFFICE, RULE_REQUIRED_DOCUMENTS,
    RULE_SUM_INSURED, RULE_TOLL_FREE, RULE_WEBSITE,
};

pub const DISCLAIMER: &str = "IMPORTANT: This is a simplified summary. Please refer to the policy document for complete terms, conditions, and details.";

const BASE_COVERAGE: &[&str] = &["Hospitalization and Medical Expenses"];
const PAYMENT_OPTIONS: &[&str] = &["Annual, Half-yearly, Quarterly"];
const CASHLESS_CLAIMS: &[&str] = &[
    "Pre-authorization required from TPA/Insurer",
    "Available at network hospitals",
];
const REIMBURSEMENT_CLAIMS: &[&str] = &[
    "Submit all required documents within specified time",
    "Original bills and medical records required",
];
const RENEWAL_TERMS: &[&str] = &["Policy renewable lifelong", "Renewal premium may vary"];
const CANCELLATION: &[&str] = &[
    "Free look period of 15 days",
    "Pro-rata refund on cancellation",
];

const SUM_INSURED_SHOWN: usize = 3;
const BENEFITS_SHOWN: usize = 4;
const PREMIUM_DETAILS_SHOWN: usize = 2;
const LIMITATIONS_SHOWN: usize = 3;

pub struct SummaryRenderer {
    profile: SummaryProfile,
}

impl SummaryRenderer {
    pub fn new(profile: SummaryProfile) -> Self {
        Self { profile }
    }

    /// The outline, populated from one analysis result
    pub fn sections(&self, result: &AnalysisResult) -> Vec<SectionTemplate> {
        let insurer = result
            .by_rule(Category::CompanyDetails, RULE_INSURER)
            .into_iter()
            .next();

        vec![
            SectionTemplate::new("POLICY DETAILS", 15)
                .slot(Slot::inline("Policy Name").with_values([self.profile.policy_name.as_str()]))
                .slot(Slot::inline("Policy Type").with_values([self.profile.policy_type.as_str()]))
                .slot(Slot::inline("Insurer").with_values(insurer.and_then(|m| m.group(1))))
                .slot(
                    Slot::inline("IRDAI Registration")
                        .with_values(insurer.and_then(|m| m.group(2))),
                )
                .slot(Slot::inline("CIN").with_values(values(result, Category::CompanyDetails, RULE_CIN)))
                .slot(Slot::inline("Registered Office").with_values(values(
                    result,
                    Category::CompanyDetails,
                    RULE_REGISTERED_OFFICE,
                ))),
            SectionTemplate::new("COVERAGE DETAILS", 17)
                .slot(Slot::fixed("Base Coverage", Layout::Inline, BASE_COVERAGE))
                .slot(
                    Slot::bulleted("Sum Insured Options").with_values(
                        values(result, Category::CoverageDetails, RULE_SUM_INSURED)
                            .into_iter()
                            .take(SUM_INSURED_SHOWN)
                            .map(|v| format!("Rs. {}", v)),
                    ),
                )
                .slot(
                    Slot::bulleted("Key Benefits").with_values(
                        values(result, Category::KeyBenefits, RULE_BENEFITS_INCLUDE)
                            .into_iter()
                            .take(BENEFITS_SHOWN),
                    ),
                ),
            SectionTemplate::new("PREMIUM INFORMATION", 20)
                .slot(
                    Slot::bulleted("Premium Details").with_values(
                        values(result, Category::PolicyIdentification, RULE_PREMIUM_DETAILS)
                            .into_iter()
                            .take(PREMIUM_DETAILS_SHOWN),
                    ),
                )
                .slot(Slot::fixed("Payment Options", Layout::Inline, PAYMENT_OPTIONS))
                .slot(Slot::inline("Grace Period").with_values(values(
                    result,
                    Category::PolicyIdentification,
                    RULE_GRACE_PERIOD,
                ))),
            SectionTemplate::new("EXCLUSIONS & LIMITATIONS", 25)
                .slot(
                    Slot::bulleted("Standard Exclusions").with_values(
                        result
                            .standard_exclusions
                            .iter()
                            .take(LIMITATIONS_SHOWN)
                            .map(|m| m.value.clone()),
                    ),
                )
                .slot(
                    Slot::bulleted("Waiting Periods").with_values(
                        result
                            .waiting_periods
                            .iter()
                            .take(LIMITATIONS_SHOWN)
                            .map(|m| m.value.clone()),
                    ),
                )
                .slot(
                    Slot::bulleted("Coverage Limits").with_values(
                        values(result, Category::CoverageDetails, RULE_COVERAGE_LIMIT)
                            .into_iter()
                            .take(LIMITATIONS_SHOWN),
                    ),
                ),
            SectionTemplate::new("CLAIMS PROCESS", 15)
                .slot(Slot::fixed("Cashless Claims Process", Layout::Bulleted, CASHLESS_CLAIMS))
                .slot(Slot::fixed("Reimbursement Claims", Layout::Bulleted, REIMBURSEMENT_CLAIMS))
                .slot(
                    Slot::bulleted("Required Documents").with_values(
                        values(result, Category::ClaimsProcess, RULE_REQUIRED_DOCUMENTS)
                            .into_iter()
                            .take(LIMITATIONS_SHOWN),
                    ),
                ),
            SectionTemplate::new("TERMS & CONDITIONS", 20)
                .slot(Slot::fixed("Renewal Terms", Layout::Bulleted, RENEWAL_TERMS))
                .slot(Slot::fixed("Cancellation", Layout::Bulleted, CANCELLATION)),
            SectionTemplate::new("CONTACT INFORMATION", 20)
                .slot(Slot::inline("Toll Free").with_values(values(
                    result,
                    Category::ContactInfo,
                    RULE_TOLL_FREE,
                )))
                .slot(Slot::inline("Email").with_values(values(result, Category::ContactInfo, RULE_EMAIL)))
                .slot(Slot::inline("Website").with_values(values(
                    result,
                    Category::ContactInfo,
                    RULE_WEBSITE,
                ))),
        ]
    }
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new(SummaryProfile::default())
    }
}

impl Renderer for SummaryRenderer {
    fn artifact_name(&self) -> &'static str {
        SUMMARY_ARTIFACT
    }

    fn title(&self) -> &'static str {
        "POLICY DOCUMENT SUMMARY"
    }

    fn render_body(&self, result: &AnalysisResult, out: &mut String) {
        for (index, section) in self.sections(result).iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            section.render(index + 1, out);
        }
        out.push('\n');
        out.push_str(DISCLAIMER);
    }
}

fn values(result: &AnalysisResult, category: Category, rule: &str) -> Vec<String> {
    result
        .by_rule(category, rule)
        .into_iter()
        .map(|m| m.value.clone())
        .collect()
}
