//! Core data types flowing through the classification pipeline.

use serde::Serialize;

/// Sentiment label attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Wire-format spelling of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

/// One text's classification outcome. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// Original text, cut to 100 characters plus `...` when longer.
    pub text: String,
    pub sentiment: Sentiment,
    /// In [0.0, 1.0], rounded to 4 decimal digits.
    pub confidence: f64,
    /// Opaque identifier of the scoring logic that produced the result.
    pub model_version: String,
}

/// Result of classifying one batch, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Same order and count as the input texts.
    pub predictions: Vec<Verdict>,
    pub count: usize,
    /// Wall-clock seconds for the whole batch, rounded to 3 decimal digits.
    pub processing_time: f64,
}
