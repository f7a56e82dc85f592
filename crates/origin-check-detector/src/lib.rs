#![warn(missing_docs)]
//! # origin-check-detector
//!
//! ## Purpose
//! Defines the analysis seam between capture flows and whatever decides the
//! verdict.
//!
//! ## Responsibilities
//! - Declare the async [`Detector`] trait for image and text analysis.
//! - Provide [`MockDetector`], the randomized stand-in used by the demo.
//! - Provide [`ReplayDetector`], which answers from a recorded backend
//!   response through the analysis contract.
//!
//! ## Data flow
//! Flow hands a captured input to [`Detector::analyze_image`] or
//! [`Detector::analyze_text`] -> awaits -> receives an
//! [`AnalysisResult`] or a [`DetectorError`].
//!
//! ## Ownership and lifetimes
//! Detectors borrow inputs for the duration of one call and return owned
//! result records.
//!
//! ## Error model
//! Every failure collapses into [`DetectorError::Failed`]; callers surface it
//! as a generic "analysis failed" notification and never retry.

mod mock;
mod replay;

use origin_check_capture::{CapturedImage, TextSubmission};
use origin_check_core::AnalysisResult;
use thiserror::Error;

pub use mock::{
    MockConfig, MockDetector, image_result_from_draws, text_result_from_draws,
    DEFAULT_IMAGE_LATENCY_MS, DEFAULT_TEXT_LATENCY_MS,
};
pub use replay::ReplayDetector;

/// Verdict provider for captured inputs.
///
/// Implement [`Detector`] (the `Send` variant); [`LocalDetector`] is derived.
#[trait_variant::make(Detector: Send)]
pub trait LocalDetector {
    /// Analyzes one captured image.
    async fn analyze_image(&self, image: &CapturedImage) -> Result<AnalysisResult, DetectorError>;

    /// Analyzes one validated text submission.
    async fn analyze_text(&self, text: &TextSubmission) -> Result<AnalysisResult, DetectorError>;
}

/// Detector failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectorError {
    /// Analysis could not produce a result.
    #[error("analysis failed: {0}")]
    Failed(String),
}
