//! Batch classification pipeline.
//!
//! Runs every text in a request through the scorer, preserving input order,
//! applies the display truncation rule, times the whole batch, and reports
//! exactly one update to the metrics registry per invocation.

use std::time::Instant;

use crate::metrics::{BatchStatus, MetricsRegistry};
use crate::models::{BatchResult, Verdict};
use crate::scorer::Scorer;

/// Characters of the original text shown before the display text is cut.
const DISPLAY_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// Classify `texts` in input order and report the batch to `metrics`.
///
/// Classification itself has no failure path; malformed requests are rejected
/// by the transport before this runs, so every batch is recorded as a success.
pub fn classify_batch(scorer: &Scorer, metrics: &MetricsRegistry, texts: &[String]) -> BatchResult {
    let started = Instant::now();

    let predictions: Vec<Verdict> = texts
        .iter()
        .map(|text| {
            let (sentiment, confidence) = scorer.score(text);
            Verdict {
                text: display_text(text),
                sentiment,
                confidence,
                model_version: scorer.model_version().to_string(),
            }
        })
        .collect();

    let elapsed = started.elapsed().as_secs_f64();
    let count = predictions.len();

    metrics.record_batch(count as u64, BatchStatus::Success);
    metrics.record_duration(elapsed);

    BatchResult {
        predictions,
        count,
        processing_time: round3(elapsed),
    }
}

/// Truncation counts Unicode scalar values, not bytes, so multi-byte input
/// never splits a character. A cut text is always exactly 103 characters.
fn display_text(text: &str) -> String {
    if text.chars().count() > DISPLAY_LIMIT {
        let mut cut: String = text.chars().take(DISPLAY_LIMIT).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        text.to_string()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_preserves_order_and_count() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();
        let input = texts(&["first text", "second text", "third text"]);

        let result = classify_batch(&scorer, &metrics, &input);

        assert_eq!(result.count, 3);
        assert_eq!(result.predictions.len(), 3);
        for (verdict, original) in result.predictions.iter().zip(&input) {
            assert_eq!(&verdict.text, original);
        }
    }

    #[test]
    fn test_short_text_displayed_unchanged() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();
        let input = texts(&["I love this product!"]);

        let result = classify_batch(&scorer, &metrics, &input);

        assert_eq!(result.predictions[0].text, "I love this product!");
        assert_eq!(result.predictions[0].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_exactly_100_chars_not_truncated() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();
        let input = vec!["x".repeat(100)];

        let result = classify_batch(&scorer, &metrics, &input);

        assert_eq!(result.predictions[0].text.chars().count(), 100);
        assert!(!result.predictions[0].text.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_long_text_truncated_to_103_chars() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();
        let input = vec!["y".repeat(250)];

        let result = classify_batch(&scorer, &metrics, &input);

        let display = &result.predictions[0].text;
        assert_eq!(display.chars().count(), 103);
        assert!(display.ends_with(ELLIPSIS));
        assert!(display.starts_with(&"y".repeat(100)));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();
        // 150 three-byte characters; byte-indexed truncation would panic or
        // split a character.
        let input = vec!["あ".repeat(150)];

        let result = classify_batch(&scorer, &metrics, &input);

        let display = &result.predictions[0].text;
        assert_eq!(display.chars().count(), 103);
        assert!(display.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_model_version_attached_to_every_verdict() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();
        let input = texts(&["one", "two"]);

        let result = classify_batch(&scorer, &metrics, &input);

        for verdict in &result.predictions {
            assert_eq!(verdict.model_version, "mock-model-v1");
        }
    }

    #[test]
    fn test_one_metrics_update_per_batch() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();

        classify_batch(&scorer, &metrics, &texts(&["a", "b", "c"]));
        assert_eq!(metrics.success_total(), 3);
        assert_eq!(metrics.request_total(), 1);

        classify_batch(&scorer, &metrics, &texts(&["d", "e"]));
        assert_eq!(metrics.success_total(), 5);
        assert_eq!(metrics.request_total(), 2);
        assert_eq!(metrics.error_total(), 0);
    }

    #[test]
    fn test_processing_time_non_negative_and_three_digits() {
        let scorer = Scorer::default();
        let metrics = MetricsRegistry::new();

        let result = classify_batch(&scorer, &metrics, &texts(&["some text"]));

        assert!(result.processing_time >= 0.0);
        let scaled = result.processing_time * 1_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}
