//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::{Config, LogFormat};
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable first, then the
/// provided `level` overrides it. Parser and transport crates are clamped so
/// that `--log-level trace` shows selector-chain decisions rather than
/// html5ever and hyper internals.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Watch which selector matched each field
/// price_scraper https://www.amazon.in/dp/B0EXAMPLE --log-level trace
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=price_scraper=debug,reqwest=info price_scraper https://example.com/p/1
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // try_init() so a second initialization (tests) is an error, not a panic
    logger_builder(level, format)
        .try_init()
        .map_err(InitializationError::from)
}

/// Initializes the logger from the `log_level` and `log_format` of `config`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger(config: &Config) -> Result<(), InitializationError> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
}

fn logger_builder(level: LevelFilter, format: LogFormat) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("price_scraper", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        // env_logger can only be installed once per process; whichever call
        // comes second must return an error instead of panicking
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_err() || second.is_err());
        if let Err(e) = second {
            assert!(e.to_string().starts_with("Logger initialization error"));
        }
    }

    #[test]
    fn test_logger_level_follows_config() {
        let config = Config {
            log_level: LogLevel::Trace,
            log_format: LogFormat::Json,
            ..Default::default()
        };
        let logger =
            logger_builder(config.log_level.clone().into(), config.log_format.clone()).build();
        assert_eq!(logger.filter(), LevelFilter::Trace);

        let config = Config {
            log_level: LogLevel::Debug,
            ..Default::default()
        };
        let logger =
            logger_builder(config.log_level.clone().into(), config.log_format.clone()).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_init_logger_from_config_does_not_panic() {
        // Either this call installs the logger or another test already did
        let result = init_logger(&Config::default());
        if let Err(e) = result {
            assert!(e.to_string().starts_with("Logger initialization error"));
        }
    }
}
