//! Shared fixtures for flow integration tests.

use origin_check_capture::ImageUpload;
use origin_check_core::{AnalysisResult, InputKind};

/// PNG upload fixture.
#[allow(dead_code)]
pub fn png_upload() -> ImageUpload {
    ImageUpload {
        file_name: "photo.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a],
    }
}

/// PDF upload fixture.
#[allow(dead_code)]
pub fn pdf_upload() -> ImageUpload {
    ImageUpload {
        file_name: "report.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.7".to_vec(),
    }
}

/// Text long enough to submit.
#[allow(dead_code)]
pub fn long_text() -> String {
    "The quick brown fox jumps over the lazy dog. It does so every single morning.".to_string()
}

/// Deterministic result fixture.
#[allow(dead_code)]
pub fn fixture_result(kind: InputKind, is_ai: bool) -> AnalysisResult {
    AnalysisResult::new(
        kind,
        is_ai,
        if is_ai { 88 } else { 72 },
        1.4,
        "Fixture description.",
        vec!["First detail".to_string(), "Second detail".to_string()],
    )
    .expect("fixture result should be valid")
}
