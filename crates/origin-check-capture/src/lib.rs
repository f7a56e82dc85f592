#![warn(missing_docs)]
//! # origin-check-capture
//!
//! ## Purpose
//! Accepts user inputs (one image file or one text block) and validates them
//! before they may be analyzed.
//!
//! ## Responsibilities
//! - Reject uploads whose declared MIME type is not `image/*`.
//! - Build a displayable data-URL preview for accepted images.
//! - Enforce the minimum text length at submission time.
//! - Infer MIME types from file extensions for path-based callers.
//!
//! ## Data flow
//! Shell reads a file -> [`ImageUpload`] -> [`capture_image`] ->
//! [`CapturedImage`] handed to a detector. Typed text ->
//! [`validate_text_submission`] -> [`TextSubmission`].
//!
//! ## Ownership and lifetimes
//! Captured inputs own their bytes so the flow can keep them while an async
//! analysis borrows a clone.
//!
//! ## Error model
//! Invalid MIME types, short text, and file read failures are reported as
//! [`CaptureError`] values.
//!
//! ## Security and privacy notes
//! No size limits and no decoding: bytes are kept opaque and are never
//! written anywhere by this crate.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use origin_check_core::input_fingerprint;
use thiserror::Error;

/// Minimum trimmed character count accepted for text analysis.
pub const MIN_TEXT_CHARS: usize = 50;

/// Fallback MIME type for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Candidate file offered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, used only for display.
    pub file_name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Image accepted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Original file name.
    pub file_name: String,
    /// Validated `image/*` MIME type.
    pub mime_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// `data:<mime>;base64,<payload>` preview.
    pub preview: String,
}

impl CapturedImage {
    /// Returns the log-safe fingerprint of the image bytes.
    pub fn fingerprint(&self) -> String {
        input_fingerprint(&self.bytes)
    }
}

/// Text accepted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSubmission {
    text: String,
}

impl TextSubmission {
    /// Returns the full submitted text, untrimmed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the character count of the trimmed text.
    pub fn char_count(&self) -> usize {
        self.text.trim().chars().count()
    }

    /// Returns the log-safe fingerprint of the text.
    pub fn fingerprint(&self) -> String {
        input_fingerprint(self.text.as_bytes())
    }
}

/// Validates one upload and produces a captured image with preview.
///
/// # Errors
/// Returns [`CaptureError::InvalidInputType`] when the MIME type does not
/// start with `image/`.
pub fn capture_image(upload: ImageUpload) -> Result<CapturedImage, CaptureError> {
    if !is_image_mime(&upload.mime_type) {
        return Err(CaptureError::InvalidInputType(upload.mime_type));
    }

    let preview = data_url(&upload.mime_type, &upload.bytes);
    Ok(CapturedImage {
        file_name: upload.file_name,
        mime_type: upload.mime_type,
        bytes: upload.bytes,
        preview,
    })
}

/// Returns `true` for `image/*` MIME types (case-insensitive).
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Encodes bytes as a `data:` URL.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Validates text at submission time.
///
/// # Errors
/// Returns [`CaptureError::InputTooShort`] when the trimmed text has fewer
/// than [`MIN_TEXT_CHARS`] characters.
pub fn validate_text_submission(text: &str) -> Result<TextSubmission, CaptureError> {
    let actual = text.trim().chars().count();
    if actual < MIN_TEXT_CHARS {
        return Err(CaptureError::InputTooShort {
            minimum: MIN_TEXT_CHARS,
            actual,
        });
    }

    Ok(TextSubmission {
        text: text.to_string(),
    })
}

/// Counter label shown below the text box.
pub fn character_count_label(text: &str) -> String {
    let count = text.chars().count();
    if count > 0 && count < MIN_TEXT_CHARS {
        format!("{count} characters (minimum {MIN_TEXT_CHARS})")
    } else {
        format!("{count} characters")
    }
}

/// Infers a MIME type from a file extension.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => OCTET_STREAM,
    }
}

/// Reads a file into an [`ImageUpload`] with an inferred MIME type.
///
/// The upload is not validated; pass it to [`capture_image`].
///
/// # Errors
/// Returns [`CaptureError::Io`] when the file cannot be read.
pub fn load_image_file(path: &Path) -> Result<ImageUpload, CaptureError> {
    let bytes = std::fs::read(path).map_err(|source| CaptureError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ImageUpload {
        file_name,
        mime_type: mime_type_for_path(path).to_string(),
        bytes,
    })
}

/// Reads a text draft from a file.
///
/// The draft is not validated; length is checked on submission.
///
/// # Errors
/// Returns [`CaptureError::Io`] when the file cannot be read.
pub fn load_text_file(path: &Path) -> Result<String, CaptureError> {
    std::fs::read_to_string(path).map_err(|source| CaptureError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads a text draft from any reader, labelling failures with `label`.
///
/// # Errors
/// Returns [`CaptureError::Io`] when reading fails.
pub fn read_text_from(
    mut reader: impl std::io::Read,
    label: &str,
) -> Result<String, CaptureError> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|source| CaptureError::Io {
            path: label.to_string(),
            source,
        })?;
    Ok(buffer)
}

/// Capture layer error type.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Upload is not an image.
    #[error("invalid file type: {0} (expected an image such as JPEG or PNG)")]
    InvalidInputType(String),
    /// Text shorter than the minimum after trimming.
    #[error("text too short: {actual} characters, at least {minimum} required")]
    InputTooShort {
        /// Required trimmed character count.
        minimum: usize,
        /// Observed trimmed character count.
        actual: usize,
    },
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
