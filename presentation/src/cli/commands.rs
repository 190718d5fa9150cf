//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final answer dump
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Each presented question with its answer, then the JSON dump
    Full,
    /// Only the JSON answer dump
    Json,
}

impl From<OutputFormat> for intake_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => intake_domain::OutputFormat::Full,
            OutputFormat::Json => intake_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tax-intake
#[derive(Parser, Debug)]
#[command(name = "tax-intake")]
#[command(author, version, about = "Interactive tax intake interview for the terminal")]
#[command(long_about = r#"
tax-intake walks you through an intake interview one question at a time.

Questions are asked in order; a question whose prerequisite answer is not
met is skipped. When the interview ends, the collected answers are printed
as a JSON object keyed by question id.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./intake.toml       Project-level config
3. ~/.config/tax-intake/config.toml   Global config

Example:
  tax-intake
  tax-intake --form forms/self-employed.toml
  tax-intake --explain -o full
"#)]
pub struct Cli {
    /// Load the questionnaire from a TOML form file instead of the built-in form
    #[arg(long, value_name = "PATH")]
    pub form: Option<PathBuf>,

    /// Answering `?` shows the current question's explanation and asks again
    #[arg(long)]
    pub explain: bool,

    /// Output format for the final answer dump
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
