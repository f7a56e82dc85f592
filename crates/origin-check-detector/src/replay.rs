//! Detector answering from a recorded backend response.

use origin_check_analysis_contract::parse_analysis_response;
use origin_check_capture::{CapturedImage, TextSubmission};
use origin_check_core::{AnalysisResult, InputKind};

use crate::{Detector, DetectorError};

/// Replays one recorded backend response for every request.
///
/// Exercises the same contract path a networked backend would use, without a
/// transport.
#[derive(Debug, Clone)]
pub struct ReplayDetector {
    raw: String,
}

impl ReplayDetector {
    /// Wraps a raw JSON response body.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    fn replay(&self, kind: InputKind, fingerprint: &str) -> Result<AnalysisResult, DetectorError> {
        let result = parse_analysis_response(&self.raw)
            .and_then(|response| {
                tracing::debug!(
                    stage = "detector",
                    action = "replay",
                    request_id = %response.request_id,
                    fingerprint,
                );
                response.into_result(kind)
            })
            .map_err(|error| DetectorError::Failed(error.to_string()))?;
        Ok(result)
    }
}

impl Detector for ReplayDetector {
    async fn analyze_image(&self, image: &CapturedImage) -> Result<AnalysisResult, DetectorError> {
        self.replay(InputKind::Image, &image.fingerprint())
    }

    async fn analyze_text(&self, text: &TextSubmission) -> Result<AnalysisResult, DetectorError> {
        self.replay(InputKind::Text, &text.fingerprint())
    }
}
