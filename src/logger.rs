//! Logger initialization
//!
//! Console logging built on `tracing-subscriber`, configured from the
//! `[logger]` section of the application settings. Supports full, compact
//! and JSON formats with color control.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggerSettings;

/// Initialize the global tracing subscriber from logger settings.
///
/// The `level` setting accepts any `EnvFilter` directive string, so both
/// plain levels (`"info"`) and per-target filters
/// (`"info,dualstore=debug"`) work. Falls back to `info` when the
/// directive cannot be parsed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let is_tty = std::io::stdout().is_terminal();
    let use_ansi = settings.colored && is_tty;

    match settings.format.as_str() {
        "compact" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .with_level(true)
                        .compact(),
                )
                .init();
        }
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).json())
                .init();
        }
        // Settings validation only admits full/compact/json; treat anything
        // else that slips through as the default format.
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }

    Ok(())
}
