//! Logging utilities for the Slotbook application.
//!
//! One place that installs the tracing subscriber so every binary and test
//! harness logs the same way.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use slotbook_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` takes precedence when set. Otherwise Slotbook crates and the
/// tower-http request traces log at `level`. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("slotbook={level},tower_http={level}")
}
