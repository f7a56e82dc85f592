#![warn(missing_docs)]
//! # origin-check-app
//!
//! ## Purpose
//! Orchestrates capture, detection, and flow state for `origin-check`.
//!
//! ## Responsibilities
//! - Load runtime configuration from the environment.
//! - Install the tracing subscriber.
//! - Drive one flow submission through a detector and back.
//! - Select the detector implementation used by the shell.
//!
//! ## Data flow
//! Env config -> [`AppDetector`] -> flow `submit` -> detector call (awaited)
//! -> flow `complete` -> [`origin_check_ui::ResultView`].
//!
//! ## Ownership and lifetimes
//! Flows are borrowed mutably only around `submit` and `complete`; the ticket
//! owns the input during the awaited detector call.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`].
//!
//! ## Security and privacy notes
//! Inputs are logged by fingerprint and length only.

use std::path::Path;
use std::time::Duration;

use origin_check_capture::{
    CaptureError, CapturedImage, TextSubmission, load_image_file, load_text_file, read_text_from,
};
use origin_check_core::{AnalysisResult, CoreError};
use origin_check_detector::{
    DEFAULT_IMAGE_LATENCY_MS, DEFAULT_TEXT_LATENCY_MS, Detector, DetectorError, MockConfig,
    MockDetector, ReplayDetector,
};
use origin_check_ui::{Completion, FlowError, ImageFlow, TextFlow};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("ORIGIN_CHECK_VERSION");

/// Env var overriding the simulated image latency.
pub const ENV_IMAGE_LATENCY_MS: &str = "ORIGIN_CHECK_IMAGE_LATENCY_MS";
/// Env var overriding the simulated text latency.
pub const ENV_TEXT_LATENCY_MS: &str = "ORIGIN_CHECK_TEXT_LATENCY_MS";
/// Env var seeding the mock detector.
pub const ENV_SEED: &str = "ORIGIN_CHECK_SEED";
/// Env var holding the tracing filter directive.
pub const ENV_LOG: &str = "ORIGIN_CHECK_LOG";

const DEFAULT_LOG_FILTER: &str = "origin_check=info,warn";

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated image analysis latency.
    pub image_latency_ms: u64,
    /// Simulated text analysis latency.
    pub text_latency_ms: u64,
    /// Mock RNG seed; OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_latency_ms: DEFAULT_IMAGE_LATENCY_MS,
            text_latency_ms: DEFAULT_TEXT_LATENCY_MS,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from process env.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when a set variable is not a valid `u64`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary lookup.
    ///
    /// Unset and blank values keep their defaults.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when a set variable is not a valid `u64`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            image_latency_ms: parse_u64(&lookup, ENV_IMAGE_LATENCY_MS)?
                .unwrap_or(defaults.image_latency_ms),
            text_latency_ms: parse_u64(&lookup, ENV_TEXT_LATENCY_MS)?
                .unwrap_or(defaults.text_latency_ms),
            seed: parse_u64(&lookup, ENV_SEED)?,
        })
    }

    /// Mock latencies derived from this config.
    pub fn mock_config(&self) -> MockConfig {
        MockConfig {
            image_latency: Duration::from_millis(self.image_latency_ms),
            text_latency: Duration::from_millis(self.text_latency_ms),
        }
    }

    /// Builds the mock detector described by this config.
    pub fn mock_detector(&self) -> MockDetector {
        match self.seed {
            Some(seed) => MockDetector::with_seed(self.mock_config(), seed),
            None => MockDetector::new(self.mock_config()),
        }
    }
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<u64>, AppError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|error| AppError::Config(format!("{key}={raw:?}: {error}"))),
        _ => Ok(None),
    }
}

/// Installs the global stderr tracing subscriber.
///
/// Filter comes from `ORIGIN_CHECK_LOG`, defaulting to
/// `origin_check=info,warn`.
///
/// # Errors
/// Returns [`AppError::Logging`] when a subscriber is already installed.
pub fn init_logging() -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|error| AppError::Logging(error.to_string()))?;

    tracing::debug!(stage = "startup", action = "logging_ready", version = APP_VERSION);
    Ok(())
}

/// Detector selected by the shell.
#[derive(Debug)]
pub enum AppDetector {
    /// Randomized demo detector.
    Mock(MockDetector),
    /// Recorded backend response.
    Replay(ReplayDetector),
}

impl AppDetector {
    /// Builds a replay detector from a recorded response file.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the file cannot be read.
    pub fn replay_from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|error| AppError::Config(format!("{}: {error}", path.display())))?;
        Ok(Self::Replay(ReplayDetector::new(raw)))
    }
}

impl Detector for AppDetector {
    async fn analyze_image(&self, image: &CapturedImage) -> Result<AnalysisResult, DetectorError> {
        match self {
            AppDetector::Mock(detector) => detector.analyze_image(image).await,
            AppDetector::Replay(detector) => detector.analyze_image(image).await,
        }
    }

    async fn analyze_text(&self, text: &TextSubmission) -> Result<AnalysisResult, DetectorError> {
        match self {
            AppDetector::Mock(detector) => detector.analyze_text(text).await,
            AppDetector::Replay(detector) => detector.analyze_text(text).await,
        }
    }
}

/// Submits the captured image and applies the detector outcome.
///
/// # Errors
/// Returns [`AppError::Flow`] when the flow cannot submit and
/// [`AppError::Detector`] when analysis failed. In both cases the flow holds
/// the matching notification.
pub async fn run_image_analysis<D: Detector>(
    flow: &mut ImageFlow,
    detector: &D,
) -> Result<Completion, AppError> {
    let ticket = flow.submit()?;
    tracing::info!(
        stage = "analysis",
        action = "submit",
        kind = "image",
        request_id = ticket.request_id,
        fingerprint = %ticket.input.fingerprint(),
        bytes = ticket.input.bytes.len(),
    );

    let outcome = detector.analyze_image(&ticket.input).await;
    finish(ticket.request_id, outcome, |id, outcome| flow.complete(id, outcome))
}

/// Submits the text draft and applies the detector outcome.
///
/// # Errors
/// Same as [`run_image_analysis`]; short drafts surface as
/// [`AppError::Flow`].
pub async fn run_text_analysis<D: Detector>(
    flow: &mut TextFlow,
    detector: &D,
) -> Result<Completion, AppError> {
    let ticket = flow.submit()?;
    tracing::info!(
        stage = "analysis",
        action = "submit",
        kind = "text",
        request_id = ticket.request_id,
        fingerprint = %ticket.input.fingerprint(),
        chars = ticket.input.char_count(),
    );

    let outcome = detector.analyze_text(&ticket.input).await;
    finish(ticket.request_id, outcome, |id, outcome| flow.complete(id, outcome))
}

fn finish(
    request_id: u64,
    outcome: Result<AnalysisResult, DetectorError>,
    complete: impl FnOnce(u64, Result<AnalysisResult, DetectorError>) -> Completion,
) -> Result<Completion, AppError> {
    match outcome {
        Ok(result) => {
            tracing::info!(
                stage = "analysis",
                action = "complete",
                request_id,
                is_ai = result.is_ai,
                confidence = result.confidence,
            );
            Ok(complete(request_id, Ok(result)))
        }
        Err(error) => match complete(request_id, Err(error.clone())) {
            // A superseded failure is not the user's current outcome.
            Completion::Stale => Ok(Completion::Stale),
            Completion::Applied => Err(AppError::Detector(error)),
        },
    }
}

/// Resolves the text draft from an inline argument, a file, or `reader`.
///
/// Inline text wins over the file; `reader` (stdin for the shell) is used
/// only when neither is given.
///
/// # Errors
/// Returns [`AppError::Capture`] with [`CaptureError::Io`] when the file or
/// reader cannot be read.
pub fn read_text_input(
    text: Option<String>,
    file: Option<&Path>,
    reader: impl std::io::Read,
) -> Result<String, AppError> {
    if let Some(text) = text {
        return Ok(text);
    }

    let draft = match file {
        Some(path) => load_text_file(path)?,
        None => read_text_from(reader, "<stdin>")?,
    };
    Ok(draft)
}

/// Loads, captures, and analyzes one image file.
///
/// # Errors
/// Returns [`AppError::Capture`] for unreadable files, [`AppError::Flow`] for
/// non-image files, and [`AppError::Detector`] for analysis failures.
pub async fn analyze_image_file<D: Detector>(
    flow: &mut ImageFlow,
    path: &Path,
    detector: &D,
) -> Result<Completion, AppError> {
    let upload = load_image_file(path)?;
    flow.offer(upload)?;
    run_image_analysis(flow, detector).await
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Logging could not be initialized.
    #[error("logging error: {0}")]
    Logging(String),
    /// Input capture error.
    #[error("capture error: {0}")]
    Capture(#[from] CaptureError),
    /// Flow rejected the transition.
    #[error("{0}")]
    Flow(#[from] FlowError),
    /// Detector failure.
    #[error("{0}")]
    Detector(#[from] DetectorError),
    /// Result record error.
    #[error("result error: {0}")]
    Core(#[from] CoreError),
}
