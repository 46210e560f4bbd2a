//! # Polarity
//!
//! A lexicon-backed sentiment scoring service.
//!
//! Polarity assigns a sentiment label and confidence score to short text
//! inputs and exposes aggregate operational counters in a Prometheus-style
//! exposition format. The scorer is a deterministic/heuristic stand-in for a
//! real model: indicator-term matching drives the label, and the pipeline and
//! metrics stay correct regardless of which scorer backs them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────┐   ┌────────┐   ┌──────────┐
//! │ Lexicon │──▶│ Scorer │──▶│  Batch    │
//! │ Matcher │   │        │   │ Classifier│
//! └─────────┘   └────────┘   └────┬─────┘
//!                                 │
//!               ┌─────────────────┤
//!               ▼                 ▼
//!         ┌──────────┐     ┌──────────┐
//!         │ Metrics  │     │   HTTP   │
//!         │ Registry │     │  (axum)  │
//!         └──────────┘     └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! polarity serve                          # start the HTTP server
//! polarity classify "I love this!"        # score text from the CLI
//! curl -X POST localhost:8000/predict \
//!   -H 'content-type: application/json' \
//!   -d '{"texts": ["I love this product!"]}'
//! curl localhost:8000/metrics             # scrape counters
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`lexicon`] | Indicator-term matching |
//! | [`scorer`] | Label and confidence assignment |
//! | [`classify`] | Batch pipeline, truncation, timing |
//! | [`metrics`] | Process-wide counters and exposition |
//! | [`server`] | JSON HTTP server |

pub mod classify;
pub mod config;
pub mod lexicon;
pub mod metrics;
pub mod models;
pub mod scorer;
pub mod server;
