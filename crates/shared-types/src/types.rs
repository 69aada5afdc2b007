#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PolicyDocument {
    pub id: String,
    pub filename: String,
    pub pages: u32,
    pub text_content: Vec<String>, // Per-page text, empty pages already dropped
    pub created_at: u64,
}

impl PolicyDocument {
    /// Full document text, pages joined by newlines
    pub fn raw_text(&self) -> String {
        self.text_content.join("\n")
    }
}

/// A rendered text artifact (summary or analysis report)
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderedReport {
    pub name: String, // Artifact name, e.g. "simplified_text.txt"
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Input handed to the external chart renderer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualizationInput {
    pub coverage_amounts: Vec<f64>, // Descending
    pub keyword_counts: Vec<KeywordCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_joins_pages() {
        let doc = PolicyDocument {
            id: "doc-1".to_string(),
            filename: "policy.pdf".to_string(),
            pages: 2,
            text_content: vec!["Page one".to_string(), "Page two".to_string()],
            created_at: 0,
        };
        assert_eq!(doc.raw_text(), "Page one\nPage two");
    }

    #[test]
    fn test_raw_text_of_empty_document() {
        let doc = PolicyDocument {
            id: "doc-2".to_string(),
            filename: "blank.pdf".to_string(),
            pages: 0,
            text_content: Vec::new(),
            created_at: 0,
        };
        assert!(doc.raw_text().is_empty());
    }
}
