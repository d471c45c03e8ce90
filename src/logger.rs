//! Logger initialization.
//!
//! This module provides the logger setup with custom formatting.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::error::InitError;

/// Initializes `env_logger` with colored, emoji-tagged formatting.
///
/// The filter comes from the `RUST_LOG` environment variable; without it
/// the level defaults to `warn` so lookups stay quiet unless asked
/// otherwise. HTTP internals are pinned at `info` so a debug filter does
/// not drown application messages in transport chatter.
///
/// # Errors
///
/// Returns `InitError::LoggerError` if a global logger is already
/// installed.
pub fn init_logger() -> Result<(), InitError> {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);

    builder.format(|buf, record| {
        let level = record.level();
        let colored_level = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };

        let emoji = match level {
            log::Level::Error => "❌",
            log::Level::Warn => "⚠️",
            log::Level::Info => "✔️",
            log::Level::Debug => "🔍",
            log::Level::Trace => "🔬",
        };

        writeln!(
            buf,
            "{} {} [{}] {}",
            emoji,
            record.target().cyan(),
            colored_level,
            record.args()
        )
    });

    // Use try_init() instead of init() to avoid panicking if a logger is
    // already installed, which happens when tests initialize repeatedly.
    builder.try_init().map_err(InitError::from)?;

    Ok(())
}
