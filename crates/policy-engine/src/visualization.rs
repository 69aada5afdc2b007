//! Input for the external chart renderer

use shared_types::{AnalysisResult, VisualizationInput};

use crate::extractors::keywords::count_keywords;
use crate::patterns::VISUALIZATION_KEYWORDS;

pub const VISUALIZATION_ARTIFACT: &str = "visualization_input.json";

/// Amounts from the analysis plus keyword counts over the rendered summary
pub fn build_visualization(result: &AnalysisResult, summary_text: &str) -> VisualizationInput {
    VisualizationInput {
        coverage_amounts: result.coverage_amounts.iter().map(|a| a.value).collect(),
        keyword_counts: count_keywords(summary_text, VISUALIZATION_KEYWORDS),
    }
}
