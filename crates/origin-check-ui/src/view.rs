//! Display projection of result records.

use std::fmt::Write as _;

use origin_check_core::{AnalysisResult, InputKind};

/// Visual tone picked from the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// AI verdict, red accent.
    Ai,
    /// Human verdict, green accent.
    Human,
}

impl Tone {
    /// Accent color name.
    pub fn accent(&self) -> &'static str {
        match self {
            Tone::Ai => "red",
            Tone::Human => "green",
        }
    }
}

/// Display-ready view of one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Verdict tone.
    pub tone: Tone,
    /// Icon name; human verdicts show the medium of the input.
    pub icon: &'static str,
    /// Card headline.
    pub headline: &'static str,
    /// Verdict description.
    pub description: String,
    /// e.g. `"87%"`.
    pub confidence_label: String,
    /// e.g. `"1.4s"`.
    pub time_label: String,
    /// Heading over the detail list.
    pub details_heading: &'static str,
    /// Detail bullets in order.
    pub details: Vec<String>,
}

impl ResultView {
    /// Projects a result; pure.
    pub fn from_result(result: &AnalysisResult) -> Self {
        let tone = if result.is_ai { Tone::Ai } else { Tone::Human };
        let headline = if result.is_ai {
            "AI-Generated Content Detected"
        } else {
            "Likely Human-Created Content"
        };
        let icon = match (tone, result.kind) {
            (Tone::Ai, _) => "alert-circle",
            (Tone::Human, InputKind::Image) => "image",
            (Tone::Human, InputKind::Text) => "file-text",
        };
        let details_heading = match result.kind {
            InputKind::Image => "Detected Patterns",
            InputKind::Text => "Analysis Details",
        };

        Self {
            tone,
            icon,
            headline,
            description: result.description.clone(),
            confidence_label: format!("{}%", result.confidence),
            time_label: format!("{:.1}s", result.analysis_time_secs),
            details_heading,
            details: result.details.clone(),
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let marker = match self.tone {
            Tone::Ai => "[AI]",
            Tone::Human => "[HUMAN]",
        };
        let _ = writeln!(out, "{marker} {}", self.headline);
        let _ = writeln!(out, "{}", self.description);
        let _ = writeln!(out);
        let _ = writeln!(out, "Confidence:    {}", self.confidence_label);
        let _ = writeln!(out, "Analysis Time: {}", self.time_label);

        if !self.details.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.details_heading);
            for detail in &self.details {
                let _ = writeln!(out, "  \u{2022} {detail}");
            }
        }
        out
    }
}
