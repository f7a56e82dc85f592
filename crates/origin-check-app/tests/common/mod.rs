//! Shared fixtures for app integration tests.

use origin_check_capture::{CapturedImage, TextSubmission};
use origin_check_core::AnalysisResult;
use origin_check_detector::{Detector, DetectorError, MockConfig, MockDetector};

/// Detector that always fails.
#[allow(dead_code)]
pub struct FailingDetector;

impl Detector for FailingDetector {
    async fn analyze_image(&self, _image: &CapturedImage) -> Result<AnalysisResult, DetectorError> {
        Err(DetectorError::Failed("backend unavailable".to_string()))
    }

    async fn analyze_text(&self, _text: &TextSubmission) -> Result<AnalysisResult, DetectorError> {
        Err(DetectorError::Failed("backend unavailable".to_string()))
    }
}

/// Seeded mock with no latency.
#[allow(dead_code)]
pub fn instant_mock() -> MockDetector {
    MockDetector::with_seed(MockConfig::instant(), 1234)
}

/// Text long enough to submit.
#[allow(dead_code)]
pub fn long_text() -> String {
    "Rust makes systems programming approachable. Ownership keeps memory safe.".to_string()
}

/// Writes a temp file and returns its path.
#[allow(dead_code)]
pub fn temp_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("origin-check-app-{}-{name}", std::process::id()));
    std::fs::write(&path, bytes).expect("fixture should be written");
    path
}
