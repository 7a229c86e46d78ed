//! Logging utilities for the Reservify services.
//!
//! All crates log through `tracing`; this module installs the subscriber once
//! at startup. `RUST_LOG` directives are honoured and a `reservify=<level>`
//! directive is added on top.

use reservify_config::LoggingConfig;
use std::str::FromStr;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber from the `[logging]` config section.
///
/// An unknown level name falls back to INFO with a warning.
pub fn init_from_config(config: &LoggingConfig) {
    let (level, known) = parse_level(&config.level);
    install(level, config.json);
    if !known {
        warn!("Unknown log level '{}', using {}", config.level, level);
    }
}

/// Parses a level name, falling back to INFO. The flag is false on fallback.
pub(crate) fn parse_level(name: &str) -> (Level, bool) {
    match Level::from_str(name) {
        Ok(level) => (level, true),
        Err(_) => (Level::INFO, false),
    }
}

fn install(level: Level, json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(
        format!("reservify={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );

    // try_init: a subscriber may already be set (tests, repeated init)
    let result = if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .try_init()
    };

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Logs `success_message` at INFO if the result is Ok, or the error with
/// `error_context` at ERROR otherwise, and hands the result back unchanged.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
