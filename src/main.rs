//! Word Points - Main entry point
//!
//! Scores each word given on the command line and prints one line per word.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use word_points::report::{render_lines, words_from_args};
use word_points::{ScoringConfig, WordScorer};

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = ScoringConfig::from_env();

    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Logs go to stderr so stdout carries only scores
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let scorer = WordScorer::from_config(&config);
    info!("Scoring with y as {}", scorer.y_policy());

    let words = words_from_args(std::env::args_os().skip(1));
    for line in render_lines(&scorer, &words) {
        println!("{}", line);
    }

    Ok(())
}
