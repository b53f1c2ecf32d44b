// CLASSIFICATION: COMMUNITY
// Filename: logging.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Process-wide logger setup for hosts embedding a session.

use env_logger::Env;
use log::LevelFilter;

/// Installs an `env_logger` backend honouring `RUST_LOG`.
///
/// Without `RUST_LOG` the filter is `debug` when `verbose` is set and `warn`
/// otherwise. Returns false when a logger was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    builder.try_init().is_ok()
}
