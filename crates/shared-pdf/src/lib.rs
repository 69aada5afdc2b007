//! PDF text extraction for policy documents
//!
//! Turns uploaded PDF bytes into a [`PolicyDocument`] holding one text entry
//! per non-empty page. Everything downstream works on plain text.
//!
//! [`PolicyDocument`]: shared_types::PolicyDocument

pub mod extract;

pub use extract::{extract_document, split_pages, PdfError};
