//! Detailed analysis report: every kept match, one section per category

use shared_types::{AnalysisResult, CategoryBucket, Category, PolicyMatch, SubKind};

use super::{line, Renderer, REPORT_ARTIFACT};

const SECTION_RULE_WIDTH: usize = 30;

#[derive(Debug, Default, Clone, Copy)]
pub struct AnalysisReportRenderer;

impl AnalysisReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for AnalysisReportRenderer {
    fn artifact_name(&self) -> &'static str {
        REPORT_ARTIFACT
    }

    fn title(&self) -> &'static str {
        "POLICY DOCUMENT ANALYSIS REPORT"
    }

    fn render_body(&self, result: &AnalysisResult, out: &mut String) {
        for (index, category) in Category::ALL.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            line(out, &format!("{}. {}", category.number(), category.title()));
            line(out, &"-".repeat(SECTION_RULE_WIDTH));

            match category {
                Category::KeyBenefits => write_bucket(&result.key_benefits, out),
                Category::KeyExclusions => write_bucket(&result.key_exclusions, out),
                Category::SpecialFeatures => write_bucket(&result.special_features, out),
                other => write_items(result.flat(*other).unwrap_or_default(), out),
            }

            if *category == Category::CoverageDetails && !result.coverage_amounts.is_empty() {
                out.push_str("\nSum Insured Amounts:\n");
                for amount in &result.coverage_amounts {
                    line(out, &format!("- Rs. {}", amount.text));
                }
            }
        }
    }
}

fn write_items(items: &[PolicyMatch], out: &mut String) {
    for item in items {
        line(out, &format!("- {}", item.span_text));
    }
}

/// Every sub-kind gets its heading, even with no matches under it
fn write_bucket<K: SubKind>(bucket: &CategoryBucket<K>, out: &mut String) {
    for (kind, items) in bucket.iter() {
        line(out, &format!("\n{}:", kind.title()));
        write_items(items, out);
    }
}
