//! Rule-based analysis of insurance policy text
//!
//! Raw document text goes through four stages: the [`Extractor`] runs the
//! pattern library, the classifier assigns sub-kinds, the aggregator filters
//! and caps, and the renderers produce the summary and the analysis report.
//!
//! ```
//! use policy_engine::PolicyEngine;
//!
//! let engine = PolicyEngine::new().unwrap();
//! let analysis = engine.analyze("Policy Number: ABC-123. Waiting period of 30 days applies.");
//! assert_eq!(analysis.policy_identification[0].value, "ABC-123");
//! ```

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod patterns;
pub mod render;
pub mod sink;
pub mod visualization;

use chrono::{Local, NaiveDateTime};
use shared_types::{AnalysisResult, Category, RenderedReport, VisualizationInput};
use tracing::{debug, info};

pub use config::{Limits, MinLengths, PipelineConfig, SummaryProfile};
pub use error::{PolicyError, Result};
pub use extractor::Extractor;
pub use patterns::{PatternLibrary, RuleSpec, STANDARD_RULES};
pub use render::{AnalysisReportRenderer, Renderer, SummaryRenderer};
pub use sink::{DirectorySink, MemorySink, ReportSink};
pub use visualization::{build_visualization, VISUALIZATION_ARTIFACT};

/// Everything produced for one document
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub analysis: AnalysisResult,
    pub summary: RenderedReport,
    pub report: RenderedReport,
    pub visualization: VisualizationInput,
}

impl PipelineOutput {
    /// Write the summary, the report and the visualization feed
    pub fn write_to(&self, sink: &mut dyn ReportSink) -> Result<()> {
        sink.write(&self.summary.name, &self.summary.content)?;
        sink.write(&self.report.name, &self.report.content)?;
        let json = serde_json::to_string_pretty(&self.visualization)?;
        sink.write(VISUALIZATION_ARTIFACT, &json)?;
        Ok(())
    }
}

/// PolicyEngine entry point
///
/// Holds the compiled pattern library and the configuration; both are
/// read-only after construction, so one engine can serve many documents
/// concurrently.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    library: PatternLibrary,
    config: PipelineConfig,
}

impl PolicyEngine {
    /// Engine with the standard rules and default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        Ok(Self::with_library(PatternLibrary::standard()?, config))
    }

    pub fn with_library(library: PatternLibrary, config: PipelineConfig) -> Self {
        Self { library, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Extract, classify and aggregate one document's text
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let matches = Extractor::new(&self.library).extract(text);
        debug!("{} raw matches from {} characters", matches.len(), text.len());

        let result = aggregator::aggregate(matches, &self.config.limits, &self.config.min_lengths);
        for category in Category::ALL {
            debug!("{}: {}", category.title(), result.count(category));
        }
        result
    }

    /// Full pipeline stamped with the current local time
    pub fn process(&self, text: &str) -> PipelineOutput {
        self.process_at(text, &Local::now().naive_local())
    }

    /// Full pipeline with an explicit generation time
    pub fn process_at(&self, text: &str, generated_at: &NaiveDateTime) -> PipelineOutput {
        info!("Analyzing {} characters of policy text", text.len());
        let analysis = self.analyze(text);

        let summary =
            SummaryRenderer::new(self.config.summary.clone()).render(&analysis, generated_at);
        let report = AnalysisReportRenderer::new().render(&analysis, generated_at);
        let visualization = build_visualization(&analysis, &summary.content);

        info!(
            "Rendered summary ({} bytes) and report ({} bytes), {} coverage amounts",
            summary.content.len(),
            report.content.len(),
            analysis.coverage_amounts.len()
        );

        PipelineOutput {
            analysis,
            summary,
            report,
            visualization,
        }
    }
}
