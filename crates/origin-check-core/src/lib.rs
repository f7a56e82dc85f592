#![warn(missing_docs)]
//! # origin-check-core
//!
//! ## Purpose
//! Defines the pure data model shared across the `origin-check` workspace.
//!
//! ## Responsibilities
//! - Represent the analysis result record returned by every detector.
//! - Derive display-only text statistics from submitted text.
//! - Produce log-safe fingerprints for submitted inputs.
//! - Encode/decode result records as camelCase JSON.
//!
//! ## Data flow
//! A detector builds an [`AnalysisResult`] through [`AnalysisResult::new`],
//! which enforces the record invariants. The UI crate projects the record for
//! display; the app crate may serialize it with [`AnalysisResult::to_json_bytes`].
//!
//! ## Ownership and lifetimes
//! Result records own their strings so they can outlive the input buffers and
//! the async task that produced them.
//!
//! ## Error model
//! Invariant violations (confidence above 100, non-positive analysis time,
//! blank description) and codec failures return [`CoreError`].
//!
//! ## Security and privacy notes
//! Inputs are identified in logs only by [`input_fingerprint`]; this crate
//! never formats raw input bytes.
//!
//! ## Example
//! ```rust
//! use origin_check_core::{AnalysisResult, InputKind};
//!
//! let result = AnalysisResult::new(
//!     InputKind::Text,
//!     true,
//!     88,
//!     1.2,
//!     "Looks generated.",
//!     vec!["Repetitive sentence structures detected".to_string()],
//! )
//! .expect("valid result");
//! assert_eq!(result.confidence, 88);
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Upper bound (inclusive) for confidence percentages.
pub const MAX_CONFIDENCE: u8 = 100;

/// Which capture flow an input or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Uploaded image file.
    Image,
    /// Pasted or typed text.
    Text,
}

impl InputKind {
    /// Returns the lowercase label used in logs and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Image => "image",
            InputKind::Text => "text",
        }
    }
}

/// Verdict record produced by one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Flow that produced this result.
    pub kind: InputKind,
    /// `true` when the input is judged AI-generated.
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    /// Confidence percentage in [0, 100].
    pub confidence: u8,
    /// Reported analysis time in seconds, one decimal place.
    #[serde(rename = "analysisTime")]
    pub analysis_time_secs: f64,
    /// Human-readable summary of the verdict.
    pub description: String,
    /// Ordered supporting details (called "patterns" for images).
    #[serde(alias = "patterns", default)]
    pub details: Vec<String>,
}

impl AnalysisResult {
    /// Constructs a validated result record.
    ///
    /// # Errors
    /// Returns [`CoreError::ConfidenceOutOfRange`] when `confidence > 100`.
    /// Returns [`CoreError::InvalidAnalysisTime`] when the time is not a
    /// positive finite number.
    /// Returns [`CoreError::EmptyDescription`] for a blank description.
    pub fn new(
        kind: InputKind,
        is_ai: bool,
        confidence: u8,
        analysis_time_secs: f64,
        description: impl Into<String>,
        details: Vec<String>,
    ) -> Result<Self, CoreError> {
        let result = Self {
            kind,
            is_ai,
            confidence,
            analysis_time_secs,
            description: description.into(),
            details,
        };
        result.validate()?;
        Ok(result)
    }

    /// Re-checks record invariants, e.g. after decoding.
    ///
    /// # Errors
    /// Same as [`AnalysisResult::new`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.confidence > MAX_CONFIDENCE {
            return Err(CoreError::ConfidenceOutOfRange(self.confidence));
        }

        if !self.analysis_time_secs.is_finite() || self.analysis_time_secs <= 0.0 {
            return Err(CoreError::InvalidAnalysisTime(self.analysis_time_secs));
        }

        if self.description.trim().is_empty() {
            return Err(CoreError::EmptyDescription);
        }

        Ok(())
    }

    /// Serializes the record to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(self).map_err(CoreError::Codec)
    }

    /// Deserializes and validates a record from JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] for malformed JSON and the
    /// [`AnalysisResult::validate`] errors for invariant violations.
    pub fn from_json_bytes(raw: &[u8]) -> Result<Self, CoreError> {
        let parsed: Self = serde_json::from_slice(raw).map_err(CoreError::Codec)?;
        parsed.validate()?;
        Ok(parsed)
    }
}

/// Word and sentence counts derived from submitted text.
///
/// These numbers only decorate the text details; no verdict depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Whitespace-separated token count.
    pub word_count: usize,
    /// Number of sentence terminator runs (`.`, `!`, `?`).
    pub sentence_count: usize,
    /// `round(word_count / max(1, sentence_count))`.
    pub avg_sentence_length: usize,
}

/// Computes [`TextStats`] for one text block.
pub fn text_stats(text: &str) -> TextStats {
    let word_count = text.split_whitespace().count();

    let mut sentence_count = 0;
    let mut in_terminator = false;
    for ch in text.chars() {
        let is_terminator = matches!(ch, '.' | '!' | '?');
        if is_terminator && !in_terminator {
            sentence_count += 1;
        }
        in_terminator = is_terminator;
    }

    let avg_sentence_length = (word_count as f64 / sentence_count.max(1) as f64).round() as usize;

    TextStats {
        word_count,
        sentence_count,
        avg_sentence_length,
    }
}

/// Returns a lowercase hex SHA-256 digest of `bytes`.
///
/// Used as an opaque trace id so logs can correlate requests without
/// carrying user content.
pub fn input_fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(digest)
}

/// Rounds seconds to one decimal place.
pub fn round_to_tenths(seconds: f64) -> f64 {
    (seconds * 10.0).round() / 10.0
}

/// Error type for core invariants and codec failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Confidence above 100 percent.
    #[error("confidence {0} is outside [0, 100]")]
    ConfidenceOutOfRange(u8),
    /// Analysis time is zero, negative, or not finite.
    #[error("analysis time must be positive, got {0}")]
    InvalidAnalysisTime(f64),
    /// Description is blank.
    #[error("description is empty")]
    EmptyDescription,
    /// JSON encoding/decoding error.
    #[error("result codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    //! Unit tests for result invariants and text statistics.

    use super::*;

    #[test]
    fn rejects_confidence_above_hundred() {
        let error = AnalysisResult::new(InputKind::Image, true, 101, 1.0, "x", vec![])
            .expect_err("confidence 101 should be rejected");
        assert!(matches!(error, CoreError::ConfidenceOutOfRange(101)));
    }

    #[test]
    fn rejects_non_positive_time_and_blank_description() {
        assert!(AnalysisResult::new(InputKind::Text, false, 50, 0.0, "x", vec![]).is_err());
        assert!(AnalysisResult::new(InputKind::Text, false, 50, f64::NAN, "x", vec![]).is_err());
        assert!(AnalysisResult::new(InputKind::Text, false, 50, 1.0, "   ", vec![]).is_err());
    }

    #[test]
    fn counts_terminator_runs_as_sentences() {
        let stats = text_stats("Hello there. How are you?! Fine...");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.avg_sentence_length, 2);
    }

    #[test]
    fn text_without_terminators_uses_one_sentence_divisor() {
        let stats = text_stats("one two three four five");
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.avg_sentence_length, 5);
    }

    #[test]
    fn fingerprint_is_stable_hex() {
        let a = input_fingerprint(b"abc");
        assert_eq!(a.len(), 64);
        assert_eq!(a, input_fingerprint(b"abc"));
        assert_ne!(a, input_fingerprint(b"abd"));
    }
}
