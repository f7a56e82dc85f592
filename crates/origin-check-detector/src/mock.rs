//! Randomized stand-in detector.

use std::sync::Mutex;
use std::time::Duration;

use origin_check_capture::{CapturedImage, TextSubmission};
use origin_check_core::{AnalysisResult, InputKind, round_to_tenths, text_stats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Detector, DetectorError};

/// Default simulated image latency.
pub const DEFAULT_IMAGE_LATENCY_MS: u64 = 2_000;
/// Default simulated text latency.
pub const DEFAULT_TEXT_LATENCY_MS: u64 = 1_500;

const IMAGE_AI_DESCRIPTION: &str = "This image shows patterns consistent with AI-generated content. The analysis detected unnatural textures, unusual symmetry, and other artifacts typical of AI generation.";
const IMAGE_HUMAN_DESCRIPTION: &str = "This image appears to be created by a human. The analysis found natural variations, realistic details, and other characteristics consistent with human-created content.";
const IMAGE_AI_PATTERNS: [&str; 4] = [
    "Unnatural textures",
    "Unusual symmetry",
    "Inconsistent lighting",
    "Unrealistic details",
];
const IMAGE_HUMAN_PATTERNS: [&str; 4] = [
    "Natural variations",
    "Realistic details",
    "Consistent lighting",
    "Authentic composition",
];

const TEXT_AI_DESCRIPTION: &str = "This text shows characteristics typical of AI-generated content. The analysis detected patterns in word choice, sentence structure, and stylistic elements that are consistent with AI writing.";
const TEXT_HUMAN_DESCRIPTION: &str = "This text appears to be written by a human. The analysis found natural language patterns, varied sentence structures, and stylistic elements consistent with human writing.";

/// Simulated latencies for [`MockDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockConfig {
    /// Delay before an image result is returned.
    pub image_latency: Duration,
    /// Delay before a text result is returned.
    pub text_latency: Duration,
}

impl MockConfig {
    /// Config with no simulated delay.
    pub fn instant() -> Self {
        Self {
            image_latency: Duration::ZERO,
            text_latency: Duration::ZERO,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            image_latency: Duration::from_millis(DEFAULT_IMAGE_LATENCY_MS),
            text_latency: Duration::from_millis(DEFAULT_TEXT_LATENCY_MS),
        }
    }
}

/// Demo detector returning randomized verdicts after a fixed delay.
///
/// The verdict is a coin flip and does **not** depend on the input content.
/// Only the text word/sentence counts are taken from the input, and only as
/// display filler. Swap in a real [`Detector`] to get meaningful results.
#[derive(Debug)]
pub struct MockDetector {
    config: MockConfig,
    rng: Mutex<StdRng>,
}

impl MockDetector {
    /// Creates a mock seeded from the OS.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a reproducible mock.
    pub fn with_seed(config: MockConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns the configured latencies.
    pub fn config(&self) -> MockConfig {
        self.config
    }

    fn draw(&self) -> Result<[f64; 3], DetectorError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| DetectorError::Failed("mock rng lock poisoned".to_string()))?;
        Ok([rng.random(), rng.random(), rng.random()])
    }
}

impl Default for MockDetector {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl Detector for MockDetector {
    async fn analyze_image(&self, image: &CapturedImage) -> Result<AnalysisResult, DetectorError> {
        tokio::time::sleep(self.config.image_latency).await;

        let [verdict, confidence, time] = self.draw()?;
        let result = image_result_from_draws(verdict, confidence, time)?;
        tracing::debug!(
            stage = "detector",
            action = "mock_image",
            fingerprint = %image.fingerprint(),
            is_ai = result.is_ai,
            confidence = result.confidence,
        );
        Ok(result)
    }

    async fn analyze_text(&self, text: &TextSubmission) -> Result<AnalysisResult, DetectorError> {
        tokio::time::sleep(self.config.text_latency).await;

        let [verdict, confidence, time] = self.draw()?;
        let result = text_result_from_draws(text.as_str(), verdict, confidence, time)?;
        tracing::debug!(
            stage = "detector",
            action = "mock_text",
            fingerprint = %text.fingerprint(),
            is_ai = result.is_ai,
            confidence = result.confidence,
        );
        Ok(result)
    }
}

/// Builds the mock image result from three uniform draws in `[0, 1)`.
///
/// # Errors
/// Returns [`DetectorError::Failed`] if the draws produce an invalid record.
pub fn image_result_from_draws(
    verdict: f64,
    confidence: f64,
    time: f64,
) -> Result<AnalysisResult, DetectorError> {
    let is_ai = verdict > 0.5;
    let confidence = if is_ai {
        percent(70.0 + confidence * 25.0)
    } else {
        percent(65.0 + confidence * 30.0)
    };
    let (description, patterns) = if is_ai {
        (IMAGE_AI_DESCRIPTION, IMAGE_AI_PATTERNS)
    } else {
        (IMAGE_HUMAN_DESCRIPTION, IMAGE_HUMAN_PATTERNS)
    };

    AnalysisResult::new(
        InputKind::Image,
        is_ai,
        confidence,
        round_to_tenths(1.0 + time * 2.0),
        description,
        patterns.iter().map(|pattern| pattern.to_string()).collect(),
    )
    .map_err(|error| DetectorError::Failed(error.to_string()))
}

/// Builds the mock text result from three uniform draws in `[0, 1)`.
///
/// `text` feeds only the word-count detail line.
///
/// # Errors
/// Returns [`DetectorError::Failed`] if the draws produce an invalid record.
pub fn text_result_from_draws(
    text: &str,
    verdict: f64,
    confidence: f64,
    time: f64,
) -> Result<AnalysisResult, DetectorError> {
    let is_ai = verdict > 0.5;
    let confidence = if is_ai {
        percent(75.0 + confidence * 20.0)
    } else {
        percent(60.0 + confidence * 35.0)
    };

    let stats = text_stats(text);
    let stats_line = format!(
        "Text contains {} words with an average sentence length of {} words",
        stats.word_count, stats.avg_sentence_length
    );

    let (description, details) = if is_ai {
        (
            TEXT_AI_DESCRIPTION,
            vec![
                "Repetitive sentence structures detected".to_string(),
                "Unusual word pattern frequency identified".to_string(),
                stats_line,
                "Limited stylistic variation throughout the content".to_string(),
            ],
        )
    } else {
        (
            TEXT_HUMAN_DESCRIPTION,
            vec![
                "Natural language patterns detected".to_string(),
                "Varied sentence structures and word choices".to_string(),
                stats_line,
                "Consistent voice and tone throughout the content".to_string(),
            ],
        )
    };

    AnalysisResult::new(
        InputKind::Text,
        is_ai,
        confidence,
        round_to_tenths(0.8 + time * 1.5),
        description,
        details,
    )
    .map_err(|error| DetectorError::Failed(error.to_string()))
}

fn percent(value: f64) -> u8 {
    value.floor().clamp(0.0, 100.0) as u8
}
