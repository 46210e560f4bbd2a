//! Process-wide prediction counters with Prometheus-style exposition.
//!
//! The registry is constructed once at startup and shared by handle, so tests
//! can instantiate isolated registries instead of fighting over module-level
//! state. All counters are lock-free atomics; increments are sized to the
//! increment itself and classification work is never serialized behind them.
//! Counters live for the process lifetime; there is no reset operation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome reported for a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Success,
    Error,
}

/// Counters backing the `/metrics` endpoint.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    success_total: AtomicU64,
    error_total: AtomicU64,
    request_total: AtomicU64,
    /// Cumulative request duration, accumulated in whole microseconds so the
    /// sum fits a single atomic word.
    duration_micros: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `size` predictions to the counter for `status`.
    pub fn record_batch(&self, size: u64, status: BatchStatus) {
        let counter = match status {
            BatchStatus::Success => &self.success_total,
            BatchStatus::Error => &self.error_total,
        };
        counter.fetch_add(size, Ordering::Relaxed);
    }

    /// Count one completed request and accumulate its duration.
    pub fn record_duration(&self, seconds: f64) {
        self.request_total.fetch_add(1, Ordering::Relaxed);
        let micros = (seconds.max(0.0) * 1_000_000.0).round() as u64;
        self.duration_micros.fetch_add(micros, Ordering::Relaxed);
    }

    pub fn success_total(&self) -> u64 {
        self.success_total.load(Ordering::Relaxed)
    }

    pub fn error_total(&self) -> u64 {
        self.error_total.load(Ordering::Relaxed)
    }

    pub fn request_total(&self) -> u64 {
        self.request_total.load(Ordering::Relaxed)
    }

    /// Mean request duration in seconds, 0.0 before any request is recorded.
    pub fn avg_duration_seconds(&self) -> f64 {
        let requests = self.request_total.load(Ordering::Relaxed);
        if requests == 0 {
            return 0.0;
        }
        let total_seconds = self.duration_micros.load(Ordering::Relaxed) as f64 / 1_000_000.0;
        total_seconds / requests as f64
    }

    /// Render the exposition document consumed by pull-based collectors.
    pub fn render(&self) -> String {
        format!(
            "# HELP sentiment_predictions_total Total predictions\n\
             # TYPE sentiment_predictions_total counter\n\
             sentiment_predictions_total{{status=\"success\"}} {}\n\
             sentiment_predictions_total{{status=\"error\"}} {}\n\
             # HELP sentiment_avg_duration_seconds Average prediction duration\n\
             # TYPE sentiment_avg_duration_seconds gauge\n\
             sentiment_avg_duration_seconds {:.3}\n",
            self.success_total(),
            self.error_total(),
            self.avg_duration_seconds(),
        )
    }
}
