//! Tests for the policy server API
//!
//! Test categories:
//! - Upload filename validation
//! - Error response mapping
//! - Artifact persistence
//! - HTTP endpoints via axum-test

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use crate::api::is_pdf_filename;

    proptest! {
        /// Property: any stem with a .pdf extension is accepted, in any case
        #[test]
        fn pdf_extension_accepted(stem in "[A-Za-z0-9_ -]{1,30}", upper in any::<bool>()) {
            let ext = if upper { "PDF" } else { "pdf" };
            let filename = format!("{}.{}", stem, ext);
            prop_assert!(is_pdf_filename(&filename));
        }

        /// Property: other extensions are rejected
        #[test]
        fn other_extensions_rejected(
            stem in "[a-z]{1,20}",
            ext in "(txt|docx|png|pdfx|html)"
        ) {
            let filename = format!("{}.{}", stem, ext);
            prop_assert!(!is_pdf_filename(&filename));
        }
    }

    #[test]
    fn test_filename_without_extension_rejected() {
        assert!(!is_pdf_filename("pdf"));
        assert!(!is_pdf_filename("policy"));
        assert!(!is_pdf_filename(""));
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::error::ServerError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::MissingFile, StatusCode::BAD_REQUEST),
            (ServerError::EmptyFilename, StatusCode::BAD_REQUEST),
            (
                ServerError::UnsupportedFileType("a.txt".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServerError::Processing("bad xref".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ServerError::Timeout(100), StatusCode::REQUEST_TIMEOUT),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ServerError::EmptyFilename.to_string(), "No file selected");
        assert_eq!(
            ServerError::UnsupportedFileType("a.txt".into()).to_string(),
            "File type not allowed. Only PDF files are accepted."
        );
        assert_eq!(
            ServerError::from(shared_pdf::PdfError::PasswordProtected).to_string(),
            "Error processing file: Password-protected PDF"
        );
    }
}

#[cfg(test)]
mod persistence_tests {
    use std::fs;

    use policy_engine::PolicyEngine;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::api::persist_artifacts;

    #[test]
    fn test_each_document_gets_its_own_directory() {
        let dir = TempDir::new().unwrap();
        let engine = PolicyEngine::new().unwrap();
        let first = engine.process("Email: first@insurer.in");
        let second = engine.process("Email: second@insurer.in");

        let first_dir = persist_artifacts(dir.path(), "doc-1", &first).unwrap();
        let second_dir = persist_artifacts(dir.path(), "doc-2", &second).unwrap();

        assert_eq!(first_dir, dir.path().join("doc-1"));
        for name in ["simplified_text.txt", "analysis_report.txt", "visualization_input.json"] {
            assert!(first_dir.join(name).exists(), "{} missing", name);
            assert!(second_dir.join(name).exists(), "{} missing", name);
        }
        let summary = fs::read_to_string(first_dir.join("simplified_text.txt")).unwrap();
        assert_eq!(summary, first.summary.content);
        assert!(summary.contains("first@insurer.in"));
        assert!(!summary.contains("second@insurer.in"));
    }
}

#[cfg(test)]
mod http_endpoint_tests {
    //! HTTP endpoint integration tests using axum-test

    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use policy_engine::PolicyEngine;

    use crate::{app_router, AppState};

    /// Create a test server with the full router
    fn create_test_server() -> TestServer {
        let state = AppState {
            engine: Arc::new(PolicyEngine::new().unwrap()),
            timeout_ms: 10000,
            output_dir: None,
        };
        TestServer::new(app_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let server = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["message"], "API is running");
    }

    #[tokio::test]
    async fn test_simplify_without_file_field() {
        let server = create_test_server();
        let form = MultipartForm::new().add_text("note", "no upload here");

        let response = server.post("/api/simplify-policy").multipart(form).await;
        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_simplify_rejects_non_pdf() {
        let server = create_test_server();
        let part = Part::bytes(b"plain text".to_vec())
            .file_name("policy.txt")
            .mime_type("text/plain");
        let form = MultipartForm::new().add_part("file", part);

        let response = server.post("/api/simplify-policy").multipart(form).await;
        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(
            json["message"],
            "File type not allowed. Only PDF files are accepted."
        );
    }

    #[tokio::test]
    async fn test_simplify_reports_unreadable_pdf() {
        let server = create_test_server();
        let part = Part::bytes(b"this is not a pdf".to_vec())
            .file_name("policy.pdf")
            .mime_type("application/pdf");
        let form = MultipartForm::new().add_part("file", part);

        let response = server.post("/api/simplify-policy").multipart(form).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "error");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let server = create_test_server();
        let response = server.get("/api/unknown").await;
        response.assert_status_not_found();
    }
}
