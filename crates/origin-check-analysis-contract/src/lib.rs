#![warn(missing_docs)]
//! # origin-check-analysis-contract
//!
//! ## Purpose
//! Defines the versioned response envelope a detection backend returns and
//! maps it into the workspace [`AnalysisResult`].
//!
//! ## Responsibilities
//! - Parse backend response payloads.
//! - Reject blank or unsupported envelope fields.
//! - Convert an envelope into a validated result record.
//!
//! ## Data flow
//! Raw JSON response -> [`parse_analysis_response`] ->
//! [`AnalysisResponse::into_result`] -> flow state.
//!
//! ## Ownership and lifetimes
//! Parsed values are owned structs to avoid borrowing from transient network
//! buffers.
//!
//! ## Error model
//! Invalid JSON, missing mandatory fields, and record invariant violations
//! return [`AnalysisContractError`].

use origin_check_core::{AnalysisResult, CoreError, InputKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical schema version for the analysis response contract.
pub const ANALYSIS_SCHEMA_VERSION_V1: &str = "v1";

/// Parsed analysis response from a detection backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Response schema version.
    pub schema_version: String,
    /// Request identifier for traceability.
    pub request_id: String,
    /// Verdict flag.
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    /// Confidence percentage.
    pub confidence: u8,
    /// Reported analysis time in seconds.
    pub analysis_time: f64,
    /// Verdict summary.
    pub description: String,
    /// Supporting details.
    #[serde(default, alias = "patterns")]
    pub details: Vec<String>,
}

impl AnalysisResponse {
    /// Converts the envelope into a validated result for the given flow.
    ///
    /// # Errors
    /// Returns [`AnalysisContractError::Record`] when the record violates
    /// result invariants.
    pub fn into_result(self, kind: InputKind) -> Result<AnalysisResult, AnalysisContractError> {
        AnalysisResult::new(
            kind,
            self.is_ai,
            self.confidence,
            self.analysis_time,
            self.description,
            self.details,
        )
        .map_err(AnalysisContractError::Record)
    }
}

/// Parses raw JSON into a validated analysis response.
///
/// # Errors
/// Returns [`AnalysisContractError::Decode`] for invalid JSON.
/// Returns [`AnalysisContractError::InvalidContract`] when mandatory contract
/// fields are blank or the schema version is unsupported.
pub fn parse_analysis_response(raw: &str) -> Result<AnalysisResponse, AnalysisContractError> {
    let parsed: AnalysisResponse =
        serde_json::from_str(raw).map_err(AnalysisContractError::Decode)?;

    if parsed.schema_version.trim().is_empty() {
        return Err(AnalysisContractError::InvalidContract(
            "schemaVersion is empty".to_string(),
        ));
    }

    if parsed.schema_version != ANALYSIS_SCHEMA_VERSION_V1 {
        return Err(AnalysisContractError::InvalidContract(format!(
            "unsupported schemaVersion {}",
            parsed.schema_version
        )));
    }

    if parsed.request_id.trim().is_empty() {
        return Err(AnalysisContractError::InvalidContract(
            "requestId is empty".to_string(),
        ));
    }

    Ok(parsed)
}

/// Analysis contract errors.
#[derive(Debug, Error)]
pub enum AnalysisContractError {
    /// JSON decode failure.
    #[error("analysis decode failure: {0}")]
    Decode(#[from] serde_json::Error),
    /// Parsed payload violates envelope invariants.
    #[error("analysis contract violation: {0}")]
    InvalidContract(String),
    /// Envelope carried an invalid result record.
    #[error("analysis record invalid: {0}")]
    Record(CoreError),
}
