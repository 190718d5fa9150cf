//! CLI entrypoint for tax-intake
//!
//! This is the main binary that wires together all layers.

use anyhow::Result;
use clap::Parser;
use intake_application::RunIntakeUseCase;
use intake_domain::OutputFormat;
use intake_infrastructure::{ConfigLoader, FormLoader, tax_year_2024};
use intake_presentation::{Cli, ConsoleFormatter, InteractivePrompter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Diagnostics go to stderr; stdout carries only prompts and answers.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Resolve the questionnaire: --form beats config, config beats built-in.
    let form_path = cli
        .form
        .clone()
        .or_else(|| config.intake.form.clone().map(PathBuf::from));
    let questionnaire = match &form_path {
        Some(path) => FormLoader::load(path)?,
        None => tax_year_2024(),
    };

    info!("Running intake with {} questions", questionnaire.len());

    let explain = cli.explain || config.intake.explain;
    let use_case = RunIntakeUseCase::new(questionnaire.clone()).with_explain(explain);

    let mut prompter = InteractivePrompter::new()?;
    let answers = use_case.execute(&mut prompter)?;

    println!();
    println!("All answers:");

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format_full(&questionnaire, &answers),
        OutputFormat::Json => ConsoleFormatter::format_json(&answers),
    };

    println!("{}", output);

    Ok(())
}
