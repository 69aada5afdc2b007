//! Text renderers for an analysis result
//!
//! Both documents share the same header. The generation time is passed in
//! rather than read from the clock, so two renders of the same result differ
//! only in the "Generated on" line.

pub mod report;
pub mod summary;
pub mod template;

use chrono::NaiveDateTime;
use shared_types::{AnalysisResult, RenderedReport};

pub use report::AnalysisReportRenderer;
pub use summary::SummaryRenderer;

pub const SUMMARY_ARTIFACT: &str = "simplified_text.txt";
pub const REPORT_ARTIFACT: &str = "analysis_report.txt";

const RULE_WIDTH: usize = 50;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A renderer turns an analysis result into one named text artifact
pub trait Renderer {
    fn artifact_name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Everything below the header
    fn render_body(&self, result: &AnalysisResult, out: &mut String);

    fn render(&self, result: &AnalysisResult, generated_at: &NaiveDateTime) -> RenderedReport {
        let mut content = header(self.title(), generated_at);
        self.render_body(result, &mut content);
        RenderedReport {
            name: self.artifact_name().to_string(),
            content,
        }
    }
}

/// Append one line and its newline
pub(crate) fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn header(title: &str, generated_at: &NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{}\n{}\n\nGenerated on: {}\n{}\n\n",
        title,
        rule,
        generated_at.format(TIMESTAMP_FORMAT),
        rule
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_layout() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        let expected = format!(
            "TITLE\n{rule}\n\nGenerated on: 2024-03-09 07:05:00\n{rule}\n\n",
            rule = "=".repeat(50)
        );
        assert_eq!(header("TITLE", &at), expected);
    }

    #[test]
    fn test_line_appends_newline() {
        let mut out = String::from("a\n");
        line(&mut out, "- b");
        line(&mut out, "");
        assert_eq!(out, "a\n- b\n\n");
    }
}
