//! hashcheck command line interface
//!
//! Argument parsing, layered configuration and report rendering around the
//! `hashcheck_core` streaming digest engine.

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod terminal;

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigManager};
use crate::error::{CliError, CliResult, ErrorContext};
use crate::orchestrators::check_orchestrator::CheckOrchestrator;

/// Load configuration for this invocation, with CLI flags applied last
pub fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    let manager = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::filesystem(&format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            ConfigManager::with_path(path.clone())
        }
        None => ConfigManager::new(),
    };

    let mut config = manager.load().map_err(|e| {
        CliError::misuse(&format!("{e:#}"))
            .with_context("config", &manager.get_config_path().display().to_string())
    })?;
    config.apply_cli_overrides(cli.buffer_size, cli.no_color);
    log::debug!("Effective configuration: {config:?}");

    Ok(config)
}

/// Whether colour is wanted for this invocation, before terminal detection
///
/// Falls back to the command line alone when configuration failed to load.
pub fn color_enabled(cli: &Cli, config: Option<&AppConfig>) -> bool {
    match config {
        Some(config) => config.output.color_enabled,
        None => !cli.no_color,
    }
}

/// Run one check with loaded configuration and return the rendered report
pub fn check(cli: &Cli, config: &AppConfig) -> CliResult<String> {
    let orchestrator = CheckOrchestrator::new(config.engine.clone())?;

    let comparison = orchestrator.check(&cli.filename, &cli.algorithm, &cli.expected_hash)?;
    let use_color = terminal::should_use_color(config.output.color_enabled);

    Ok(output::render_report(&comparison, use_color))
}
