// ABOUTME: Layer constructors for the different logging output formats
// ABOUTME: Provides console, file, and JSON layers plus the environment filter

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{FileConfig, LoggingConfig, OutputConfig, Rotation};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Create a console output layer. Console output goes to stderr.
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console {
        return None;
    }

    let layer = if config.pretty_console {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .pretty()
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed()
    };

    Some(layer)
}

/// Create a file output layer with rotation.
pub fn create_file_layer(config: &FileConfig) -> Result<BoxedLayer> {
    let directory = config
        .path
        .parent()
        .context("Log file path has no parent directory")?;

    fs::create_dir_all(directory).context(format!(
        "Failed to create log directory: {}",
        directory.display()
    ))?;

    let file_name = config
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid log file path")?;

    let file_appender = match config.rotation {
        Rotation::Hourly => rolling::hourly(directory, file_name),
        Rotation::Daily => rolling::daily(directory, file_name),
        Rotation::Never => rolling::never(directory, file_name),
    };
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    // The guard flushes on drop; the process-wide subscriber outlives any owner we could give it.
    std::mem::forget(guard);

    let layer = fmt::layer()
        .with_writer(non_blocking_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();

    Ok(layer)
}

/// Create a JSON output layer for structured logging.
pub fn create_json_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.json {
        return None;
    }

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();

    Some(layer)
}

/// Create an environment filter from the logging configuration.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(format!("{}", config.level.0));

    for (module, level) in &config.module_levels {
        filter = filter.add_directive(format!("{}={}", module, level.0).parse()?);
    }

    // RUST_LOG, when set, replaces the configured levels wholesale
    if let Some(directives) = &config.directives {
        filter = EnvFilter::new(directives);
    }

    Ok(filter)
}
