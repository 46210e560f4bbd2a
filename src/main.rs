//! # Polarity CLI (`polarity`)
//!
//! The `polarity` binary runs the sentiment service and offers a direct
//! command-line path to the classifier for quick checks.
//!
//! ## Usage
//!
//! ```bash
//! polarity [--config ./config/polarity.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `polarity serve` | Start the HTTP server (`/`, `/health`, `/predict`, `/metrics`) |
//! | `polarity classify <text>...` | Classify up to 10 texts and print the verdicts |
//!
//! ## Examples
//!
//! ```bash
//! # Start the server with built-in defaults (127.0.0.1:8000)
//! polarity serve
//!
//! # Start with a config file
//! polarity serve --config ./config/polarity.toml
//!
//! # Score a couple of texts from the shell
//! polarity classify "I love this product!" "This is terrible."
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use polarity::classify::classify_batch;
use polarity::config::{self, Config};
use polarity::metrics::MetricsRegistry;
use polarity::scorer::Scorer;
use polarity::server::{self, MAX_BATCH_SIZE};

/// Polarity — a lexicon-backed sentiment scoring service.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. Built-in defaults apply when the flag is omitted. See
/// `config/polarity.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "polarity",
    about = "Polarity — a lexicon-backed sentiment scoring service",
    version,
    long_about = "Polarity assigns a sentiment label and confidence score to short text inputs \
    over a JSON HTTP API, and exposes aggregate operational counters in a Prometheus-style \
    exposition format."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Optional; server bind address and scorer settings fall back to
    /// built-in defaults when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Binds to `[server].bind` and serves `/`, `/health`, `/predict`, and
    /// `/metrics` until the process is terminated.
    Serve,

    /// Classify texts from the command line.
    ///
    /// Runs the same pipeline as `POST /predict` and prints one verdict per
    /// input text, followed by the batch timing.
    Classify {
        /// One or more texts to classify (at most 10 per run).
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Serve => server::run_server(&config).await,
        Commands::Classify { texts } => run_classify(&config, &texts),
    }
}

/// Run the `classify` command: score the texts and print the verdicts.
fn run_classify(config: &Config, texts: &[String]) -> Result<()> {
    if texts.len() > MAX_BATCH_SIZE {
        anyhow::bail!("at most {} texts per batch", MAX_BATCH_SIZE);
    }

    let scorer = Scorer::from_config(config);
    let metrics = MetricsRegistry::new();

    let result = classify_batch(&scorer, &metrics, texts);

    for verdict in &result.predictions {
        println!(
            "{:<8} {:.4}  {}",
            verdict.sentiment.as_str(),
            verdict.confidence,
            verdict.text
        );
    }
    println!();
    println!(
        "{} text{} in {:.3}s ({})",
        result.count,
        if result.count == 1 { "" } else { "s" },
        result.processing_time,
        scorer.model_version()
    );

    Ok(())
}
