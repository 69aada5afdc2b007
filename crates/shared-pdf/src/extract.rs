//! PDF text extraction module
//!
//! Wraps `pdf-extract` and splits its output into pages on form feed
//! characters. Pages that yield no text are skipped rather than treated as
//! errors; a document with no text at all is still returned (empty), since
//! the analysis pipeline degrades to boilerplate output on empty input.
//!
//! # Example
//! ```no_run
//! use shared_pdf::{extract_document, PdfError};
//!
//! fn load(pdf_bytes: &[u8]) -> Result<(), PdfError> {
//!     let document = extract_document(pdf_bytes, "policy.pdf")?;
//!     println!("Extracted {} pages", document.pages);
//!     Ok(())
//! }
//! ```

use pdf_extract::extract_text_from_mem;
use shared_types::PolicyDocument;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while reading a policy PDF
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Password-protected PDF")]
    PasswordProtected,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),
}

/// Extract the text of every page of a PDF
///
/// # Errors
/// - `PdfError::PasswordProtected` - The PDF requires a password
/// - `PdfError::InvalidPdf` - The PDF is malformed or corrupted
/// - `PdfError::Extraction` - Any other failure reported by the parser
pub fn extract_document(pdf_bytes: &[u8], filename: &str) -> Result<PolicyDocument, PdfError> {
    let raw_text = extract_text_from_mem(pdf_bytes).map_err(|e| {
        let error_msg = e.to_string().to_lowercase();

        if error_msg.contains("encrypted") || error_msg.contains("password") {
            PdfError::PasswordProtected
        } else if error_msg.contains("invalid")
            || error_msg.contains("malformed")
            || error_msg.contains("corrupt")
        {
            PdfError::InvalidPdf(e.to_string())
        } else {
            PdfError::Extraction(e.to_string())
        }
    })?;

    let (page_count, text_content) = split_pages(&raw_text);
    let total_chars: usize = text_content.iter().map(|p| p.len()).sum();
    info!(
        "Extracted {} characters from {} pages of {}",
        total_chars, page_count, filename
    );

    Ok(PolicyDocument {
        id: uuid::Uuid::new_v4().to_string(),
        filename: filename.to_string(),
        pages: page_count,
        text_content,
        created_at: chrono::Utc::now().timestamp() as u64,
    })
}

/// Split extractor output into pages on form feeds
///
/// Returns the total page count and the text of the pages that contain
/// anything besides whitespace.
pub fn split_pages(raw_text: &str) -> (u32, Vec<String>) {
    let trimmed = raw_text.trim_end_matches('\x0C');
    if trimmed.is_empty() {
        return (0, Vec::new());
    }

    let mut pages = Vec::new();
    let mut page_count = 0u32;
    for (idx, page_text) in trimmed.split('\x0C').enumerate() {
        page_count += 1;
        if page_text.trim().is_empty() {
            warn!("Page {} contains no text", idx + 1);
            continue;
        }
        debug!("Page {}: {} characters", idx + 1, page_text.len());
        pages.push(page_text.to_string());
    }

    (page_count, pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = extract_document(b"", "empty.pdf");
        assert!(result.is_err());
    }

    #[test]
    fn test_splits_on_form_feed() {
        let (count, pages) = split_pages("Page 1 content\x0CPage 2 content\x0CPage 3 content");
        assert_eq!(count, 3);
        assert_eq!(pages.len(), 3);
        assert!(pages[1].contains("Page 2"));
    }

    #[test]
    fn test_single_page_without_form_feed() {
        let (count, pages) = split_pages("Only page.\nLine 2.");
        assert_eq!(count, 1);
        assert_eq!(pages, vec!["Only page.\nLine 2.".to_string()]);
    }

    #[test]
    fn test_blank_pages_are_skipped_but_counted() {
        let (count, pages) = split_pages("Cover\x0C   \n \x0CTerms\x0C");
        assert_eq!(count, 3);
        assert_eq!(pages, vec!["Cover".to_string(), "Terms".to_string()]);
    }

    #[test]
    fn test_empty_text_has_no_pages() {
        let (count, pages) = split_pages("");
        assert_eq!(count, 0);
        assert!(pages.is_empty());
    }
}
