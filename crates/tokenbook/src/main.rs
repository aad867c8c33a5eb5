// ABOUTME: Entry point for the tokenbook command-line design-token preview
// ABOUTME: Loads configuration, sets up logging, builds the registry and runs one command

mod cli;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tokenbook_logging::{Level, LoggingConfig, debug, info};
use tokenbook_tokens::{Registry, TokenSource, is_light};

use crate::cli::{Cli, Command, ExportFormat};
use crate::config::AppConfig;

fn logging_config(
    mut config: LoggingConfig,
    verbosity: u8,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LoggingConfig> {
    config
        .apply_overrides_from(lookup)
        .context("Failed to apply logging overrides from environment")?;

    // -v flags beat both the config file and the environment
    if verbosity > 0 {
        let level = match verbosity {
            1 => Level::INFO,
            2 => Level::DEBUG,
            _3_or_more => Level::TRACE,
        };
        config.level = level.into();
        config.module_levels.clear();
        config.directives = None;
    }

    Ok(config)
}

fn setup_logging(config: LoggingConfig, verbosity: u8) -> Result<()> {
    let config = logging_config(config, verbosity, |key| std::env::var(key).ok())?;
    tokenbook_logging::init_logging_with_config(config)
        .context("Failed to initialize tokenbook logging")
}

fn load_registry(source: Option<&Path>) -> Result<Registry> {
    match source {
        Some(path) => {
            info!(path = %path.display(), "Loading token catalog");
            let source = TokenSource::from_path(path)
                .with_context(|| format!("Failed to load token catalog {}", path.display()))?;
            Registry::new(source)
                .with_context(|| format!("Token catalog {} is inconsistent", path.display()))
        }
        None => Registry::builtin().context("Built-in token catalog is inconsistent"),
    }
}

fn export(registry: &Registry, format: ExportFormat) -> Result<String> {
    let document = registry.export();
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&document)
            .context("Failed to serialize token export as JSON")?,
        ExportFormat::Toml => document
            .to_toml_string()
            .context("Failed to serialize token export as TOML")?,
    };
    Ok(text)
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    setup_logging(config.logging.clone(), cli.verbose)?;
    config.log_summary(cli.config.as_deref());

    // The CLI flag wins over the configured catalog
    let source = cli.tokens.as_deref().or(config.tokens.source.as_deref());
    let registry = load_registry(source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Primitives { group } => render::primitives(&mut out, &registry, group.as_deref())?,
        Command::Semantic { group } => render::semantic(&mut out, &registry, group.as_deref())?,
        Command::Mapping { filter } => render::mapping(&mut out, &registry, filter.as_deref())?,
        Command::Typography => render::typography(&mut out, &registry)?,
        Command::Resolve { token } => {
            let value = registry.resolve(&token)?;
            writeln!(out, "{value}")?;
        }
        Command::Classify { color } => {
            let class = if is_light(&color) { "light" } else { "dark" };
            writeln!(out, "{class}")?;
        }
        Command::Export { format } => writeln!(out, "{}", export(&registry, format)?)?,
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Printed once below; the event is for file and JSON sinks
            debug!(error = %format!("{err:#}"), "tokenbook command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
