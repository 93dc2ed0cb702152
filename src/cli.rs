//! CLI interface for the bid matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bid-matcher")]
#[command(about = "Opportunity matching and ranking for procurement notices and job postings")]
#[command(
    long_about = "Score scraped procurement and job notices against an organizational \
    capability profile and rank the ones worth responding to"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect sample opportunities and rank them against a profile
    Match {
        /// Path to a capability statement text file
        #[arg(short, long)]
        profile: PathBuf,

        /// Company name override
        #[arg(long)]
        company: Option<String>,

        /// How many days back sources should look
        #[arg(long)]
        days_back: Option<u32>,

        /// Cap on merged opportunities
        #[arg(long)]
        max: Option<usize>,

        /// Limit the search keyword list for a faster pass
        #[arg(long)]
        quick: bool,

        /// Wall-clock budget in seconds for expensive analysis
        #[arg(long)]
        budget_secs: Option<f64>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show classification tags and analysis details per match
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("xml").is_err());
    }
}
