//! Command line argument parsing for the requery CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::expansion::Strategy;
use crate::session::SessionConfig;

/// Requery - interactive relevance feedback query expansion
#[derive(Parser, Debug, Clone)]
#[command(name = "requery")]
#[command(about = "Refine a web search query from your relevance feedback")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RequeryArgs {
    /// Custom Search JSON API key
    #[arg(value_name = "API_KEY")]
    pub api_key: String,

    /// Programmable Search Engine id
    #[arg(value_name = "ENGINE_ID")]
    pub engine_id: String,

    /// Target precision@10, between 0 and 1
    #[arg(value_name = "PRECISION", value_parser = parse_precision)]
    pub precision: f64,

    /// Initial query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Term ranking strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Rocchio weight of the original query
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Rocchio weight of relevant results
    #[arg(long)]
    pub beta: Option<f64>,

    /// Rocchio weight of non-relevant results
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Maximum number of terms appended per round
    #[arg(short = 'n', long)]
    pub max_new_terms: Option<usize>,

    /// Maximum number of search rounds
    #[arg(short = 'a', long)]
    pub max_attempts: Option<usize>,

    /// JSON configuration file; command line options override it
    #[arg(short, long, env = "REQUERY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Newline separated stop word file
    #[arg(long, conflicts_with = "stop_words_url")]
    pub stop_words: Option<PathBuf>,

    /// URL of a newline separated stop word list
    #[arg(long)]
    pub stop_words_url: Option<String>,

    /// Read results from a JSON file instead of calling the search API
    #[arg(long)]
    pub results_file: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RequeryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Session configuration: the config file if given, then command line
    /// overrides. The result is validated.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)?,
            None => SessionConfig::default(),
        };

        config.target_precision = self.precision;
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }

        let augmentation = &mut config.augmentation;
        if let Some(strategy) = self.strategy {
            augmentation.strategy = strategy;
        }
        if let Some(alpha) = self.alpha {
            augmentation.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            augmentation.beta = beta;
        }
        if let Some(gamma) = self.gamma {
            augmentation.gamma = gamma;
        }
        if let Some(max_new_terms) = self.max_new_terms {
            augmentation.max_new_terms = max_new_terms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_precision(value: &str) -> std::result::Result<f64, String> {
    let precision: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=1.0).contains(&precision) {
        Ok(precision)
    } else {
        Err(format!("precision must be between 0 and 1, got {precision}"))
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable transcript
    Human,
    /// JSON session report
    Json,
}
