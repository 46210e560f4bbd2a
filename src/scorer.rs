//! Heuristic sentiment scorer.
//!
//! Stands in for a real model: a clean positive or negative indicator hit
//! scores in a high-confidence band, while conflicting or absent signal falls
//! back to a random label in a low-confidence band. The fallback is a
//! mock-mode shim for "unknown label, unknown confidence", not a prediction.

use std::ops::Range;

use rand::Rng;

use crate::config::Config;
use crate::lexicon::Lexicon;
use crate::models::Sentiment;

/// Confidence band for texts with a single unambiguous polarity.
const HIGH_CONFIDENCE: Range<f64> = 0.85..0.99;

/// Confidence band for the conflicting/no-signal fallback.
const LOW_CONFIDENCE: Range<f64> = 0.50..0.75;

/// Lexicon-backed scorer. Total over any string input; never fails.
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: Lexicon,
    model_version: String,
}

impl Scorer {
    pub fn new(lexicon: Lexicon, model_version: impl Into<String>) -> Self {
        Self {
            lexicon,
            model_version: model_version.into(),
        }
    }

    /// Build a scorer from configuration: base lexicon plus any configured
    /// extra terms, tagged with the configured model version.
    pub fn from_config(config: &Config) -> Self {
        let lexicon = Lexicon::new(
            &config.scorer.extra_positive,
            &config.scorer.extra_negative,
        );
        Self::new(lexicon, config.scorer.model_version.clone())
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// Score one text. Returns the label and a confidence rounded to 4
    /// decimal digits.
    pub fn score(&self, text: &str) -> (Sentiment, f64) {
        let hit = self.lexicon.classify_indicators(text);
        let mut rng = rand::thread_rng();

        let (sentiment, confidence) = match (hit.has_positive, hit.has_negative) {
            (true, false) => (Sentiment::Positive, rng.gen_range(HIGH_CONFIDENCE)),
            (false, true) => (Sentiment::Negative, rng.gen_range(HIGH_CONFIDENCE)),
            // Conflicting signal and no signal share one fallback branch,
            // matching the behavior this scorer mocks.
            _ => {
                let label = if rng.gen_bool(0.5) {
                    Sentiment::Positive
                } else {
                    Sentiment::Negative
                };
                (label, rng.gen_range(LOW_CONFIDENCE))
            }
        };

        (sentiment, round4(confidence))
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Lexicon::default(), "mock-model-v1")
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
