#![warn(missing_docs)]
//! # origin-check-ui
//!
//! ## Purpose
//! Defines the UI-facing state model for the image and text detection flows.
//!
//! ## Responsibilities
//! - Track each flow through `Empty -> Captured -> Analyzing -> Resulted`.
//! - Hand out request tickets and drop stale completions.
//! - Queue user-facing notifications for the shell to display.
//! - Project result records into display-ready views.
//!
//! ## Data flow
//! Shell events (capture, submit, reset) mutate an [`ImageFlow`] or
//! [`TextFlow`]. Submitting yields an [`AnalysisTicket`]; the shell awaits the
//! detector and feeds the outcome back through `complete`. The current result
//! is rendered through [`ResultView`].
//!
//! ## Ownership and lifetimes
//! Flows own their input, result, and notifications. Tickets carry a clone of
//! the input so the analysis call does not borrow the flow across an await.
//!
//! ## Error model
//! Illegal transitions and invalid inputs return [`FlowError`]; every error is
//! also pushed as a [`Notification`] when the user should see it.

mod view;

use origin_check_capture::{
    CaptureError, CapturedImage, ImageUpload, MIN_TEXT_CHARS, TextSubmission, capture_image,
    character_count_label, validate_text_submission,
};
use origin_check_core::{AnalysisResult, InputKind};
use origin_check_detector::DetectorError;
use thiserror::Error;

pub use view::{ResultView, Tone};

/// Lifecycle state of one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing captured.
    Empty,
    /// Input captured, not yet submitted.
    Captured,
    /// Analysis call in flight.
    Analyzing,
    /// Result available.
    Resulted,
}

/// Notification styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational.
    Info,
    /// Error styling.
    Destructive,
}

/// Transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Styling hint.
    pub severity: Severity,
}

impl Notification {
    fn new(title: &str, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity,
        }
    }
}

/// One submitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket<T> {
    /// Monotonic request id within the flow.
    pub request_id: u64,
    /// Input to analyze.
    pub input: T,
}

/// What happened to a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Outcome was applied to the flow.
    Applied,
    /// Request was superseded by a reset or newer input; outcome ignored.
    Stale,
}

/// Flow transition errors.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Submit without captured input.
    #[error("nothing captured to analyze")]
    NothingCaptured,
    /// Submit while a request is in flight.
    #[error("analysis already in progress")]
    AnalysisInProgress,
    /// Input rejected by capture validation.
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

/// State shared by both flows.
#[derive(Debug, Clone)]
pub struct Flow<I> {
    kind: InputKind,
    state: FlowState,
    input: Option<I>,
    result: Option<AnalysisResult>,
    last_request_id: u64,
    in_flight: Option<u64>,
    notifications: Vec<Notification>,
}

impl<I: Clone> Flow<I> {
    /// Creates an empty flow.
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            state: FlowState::Empty,
            input: None,
            result: None,
            last_request_id: 0,
            in_flight: None,
            notifications: Vec::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Returns the captured input.
    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    /// Returns the current result.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Accepts a new input, dropping any result and in-flight request.
    pub fn capture(&mut self, input: I) {
        self.input = Some(input);
        self.result = None;
        self.in_flight = None;
        self.transition(FlowState::Captured);
    }

    /// Drops the current result, moving `Resulted -> Captured`; no-op when
    /// there is none.
    pub fn clear_result(&mut self) {
        if self.result.take().is_some() && self.state == FlowState::Resulted {
            self.transition(FlowState::Captured);
        }
    }

    /// Returns to `Empty`, discarding input, result, and in-flight request.
    pub fn reset(&mut self) {
        self.input = None;
        self.result = None;
        self.in_flight = None;
        self.transition(FlowState::Empty);
    }

    /// Moves `Captured -> Analyzing` and issues a ticket.
    ///
    /// # Errors
    /// Returns [`FlowError::AnalysisInProgress`] while analyzing and
    /// [`FlowError::NothingCaptured`] when no input is held or a result is
    /// already shown.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket<I>, FlowError> {
        self.begin_analysis_with(|input| Ok(input.clone()))
    }

    /// Like [`Flow::begin_analysis`] but validates the input first.
    ///
    /// Validation errors are pushed as notifications and leave the state
    /// unchanged.
    ///
    /// # Errors
    /// Returns the errors of [`Flow::begin_analysis`] plus
    /// [`FlowError::Capture`] from `validate`.
    pub fn begin_analysis_with<T>(
        &mut self,
        validate: impl FnOnce(&I) -> Result<T, CaptureError>,
    ) -> Result<AnalysisTicket<T>, FlowError> {
        match self.state {
            FlowState::Analyzing => return Err(FlowError::AnalysisInProgress),
            FlowState::Empty | FlowState::Resulted => return Err(FlowError::NothingCaptured),
            FlowState::Captured => {}
        }

        let input = self.input.as_ref().ok_or(FlowError::NothingCaptured)?;
        let validated = match validate(input) {
            Ok(validated) => validated,
            Err(error) => {
                self.notify_capture_error(&error);
                return Err(FlowError::Capture(error));
            }
        };

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(request_id);
        self.transition(FlowState::Analyzing);

        Ok(AnalysisTicket {
            request_id,
            input: validated,
        })
    }

    /// Applies the outcome of one request.
    ///
    /// Success moves to `Resulted`; failure moves back to `Captured` with the
    /// result cleared. Outcomes for any request other than the current one
    /// are ignored.
    pub fn complete(
        &mut self,
        request_id: u64,
        outcome: Result<AnalysisResult, DetectorError>,
    ) -> Completion {
        if self.in_flight != Some(request_id) || self.state != FlowState::Analyzing {
            tracing::debug!(
                stage = "flow",
                action = "stale_completion",
                kind = self.kind.as_str(),
                request_id,
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        let subject = self.subject();
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.transition(FlowState::Resulted);
                self.notifications.push(Notification::new(
                    "Analysis Complete",
                    format!("Your {subject} has been successfully analyzed."),
                    Severity::Info,
                ));
            }
            Err(error) => {
                tracing::error!(
                    stage = "flow",
                    action = "analysis_failed",
                    kind = self.kind.as_str(),
                    request_id,
                    %error,
                );
                self.result = None;
                self.transition(FlowState::Captured);
                self.notifications.push(Notification::new(
                    "Analysis Failed",
                    format!("There was an error analyzing your {subject}. Please try again."),
                    Severity::Destructive,
                ));
            }
        }

        Completion::Applied
    }

    /// Takes all queued notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify_capture_error(&mut self, error: &CaptureError) {
        let notification = match error {
            CaptureError::InvalidInputType(_) => Notification::new(
                "Invalid file type",
                "Please upload an image file (JPEG, PNG, etc.)",
                Severity::Destructive,
            ),
            CaptureError::InputTooShort { minimum, .. } => Notification::new(
                "Text too short",
                format!("Please enter at least {minimum} characters for accurate analysis."),
                Severity::Destructive,
            ),
            CaptureError::Io { .. } => Notification::new(
                "Could not read file",
                error.to_string(),
                Severity::Destructive,
            ),
        };
        self.notifications.push(notification);
    }

    fn subject(&self) -> &'static str {
        match self.kind {
            InputKind::Image => "image",
            InputKind::Text => "text",
        }
    }

    fn transition(&mut self, next: FlowState) {
        if self.state != next {
            tracing::debug!(
                stage = "flow",
                action = "transition",
                kind = self.kind.as_str(),
                from = ?self.state,
                to = ?next,
            );
        }
        self.state = next;
    }
}

/// Image upload flow.
#[derive(Debug, Clone)]
pub struct ImageFlow {
    flow: Flow<CapturedImage>,
}

impl ImageFlow {
    /// Creates an empty image flow.
    pub fn new() -> Self {
        Self {
            flow: Flow::new(InputKind::Image),
        }
    }

    /// Offers one upload. Non-image uploads are rejected and leave the flow
    /// as it was.
    ///
    /// # Errors
    /// Returns [`FlowError::Capture`] with
    /// [`CaptureError::InvalidInputType`] for non-image MIME types.
    pub fn offer(&mut self, upload: ImageUpload) -> Result<(), FlowError> {
        match capture_image(upload) {
            Ok(image) => {
                self.flow.capture(image);
                Ok(())
            }
            Err(error) => {
                self.flow.notify_capture_error(&error);
                Err(FlowError::Capture(error))
            }
        }
    }

    /// Returns the preview data URL of the captured image.
    pub fn preview(&self) -> Option<&str> {
        self.flow.input().map(|image| image.preview.as_str())
    }

    /// Submits the captured image.
    ///
    /// # Errors
    /// See [`Flow::begin_analysis`].
    pub fn submit(&mut self) -> Result<AnalysisTicket<CapturedImage>, FlowError> {
        self.flow.begin_analysis()
    }

    /// Applies a detector outcome. See [`Flow::complete`].
    pub fn complete(
        &mut self,
        request_id: u64,
        outcome: Result<AnalysisResult, DetectorError>,
    ) -> Completion {
        self.flow.complete(request_id, outcome)
    }

    /// Clears image, preview, and result.
    pub fn reset(&mut self) {
        self.flow.reset();
    }

    /// Returns the shared flow state.
    pub fn flow(&self) -> &Flow<CapturedImage> {
        &self.flow
    }

    /// Takes queued notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.flow.drain_notifications()
    }
}

impl Default for ImageFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Text input flow.
///
/// The draft is held as typed; length is only enforced on submit.
#[derive(Debug, Clone)]
pub struct TextFlow {
    flow: Flow<String>,
}

impl TextFlow {
    /// Creates an empty text flow.
    pub fn new() -> Self {
        Self {
            flow: Flow::new(InputKind::Text),
        }
    }

    /// Replaces the draft text. Any shown result or in-flight request is
    /// dropped; empty text returns the flow to `Empty`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.flow.reset();
        } else {
            self.flow.capture(text);
        }
    }

    /// Returns the current draft.
    pub fn text(&self) -> &str {
        self.flow.input().map(String::as_str).unwrap_or_default()
    }

    /// Counter label for the current draft.
    pub fn character_count_label(&self) -> String {
        character_count_label(self.text())
    }

    /// Returns `true` when the draft would pass submission.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.flow.state(),
            FlowState::Captured | FlowState::Resulted
        ) && validate_text_submission(self.text()).is_ok()
    }

    /// Validates and submits the draft.
    ///
    /// The draft may be re-analyzed while its result is shown; the old result
    /// is dropped first.
    ///
    /// # Errors
    /// Returns [`FlowError::Capture`] with [`CaptureError::InputTooShort`]
    /// for short drafts, plus the errors of [`Flow::begin_analysis`].
    pub fn submit(&mut self) -> Result<AnalysisTicket<TextSubmission>, FlowError> {
        if self.flow.state() == FlowState::Empty {
            let error = CaptureError::InputTooShort {
                minimum: MIN_TEXT_CHARS,
                actual: 0,
            };
            self.flow.notify_capture_error(&error);
            return Err(FlowError::Capture(error));
        }
        // A shown result belongs to this exact draft; editing would have
        // cleared it already.
        if self.flow.state() == FlowState::Resulted {
            self.flow.clear_result();
        }
        self.flow
            .begin_analysis_with(|draft| validate_text_submission(draft))
    }

    /// Applies a detector outcome. See [`Flow::complete`].
    pub fn complete(
        &mut self,
        request_id: u64,
        outcome: Result<AnalysisResult, DetectorError>,
    ) -> Completion {
        self.flow.complete(request_id, outcome)
    }

    /// Clears draft and result.
    pub fn reset(&mut self) {
        self.flow.reset();
    }

    /// Returns the shared flow state.
    pub fn flow(&self) -> &Flow<String> {
        &self.flow
    }

    /// Takes queued notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.flow.drain_notifications()
    }
}

impl Default for TextFlow {
    fn default() -> Self {
        Self::new()
    }
}
