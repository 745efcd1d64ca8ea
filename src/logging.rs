//! Logging setup over the `log` facade.
//!
//! The codec logs skipped and truncated records at debug/trace level; run
//! with `RUST_LOG=picokey_phy=debug` to see them.

use env_logger::Env;
use log::{debug, error, info, log_enabled, warn, Level};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "picokey_phy=info";

/// Initializes the logger with the `env_logger` crate.
///
/// Safe to call more than once; later calls keep the first logger.
pub fn init_logger() {
    init_logger_with_filter(DEFAULT_LOG_FILTER);
}

/// Initializes the logger, using `filter` unless `RUST_LOG` overrides it.
pub fn init_logger_with_filter(filter: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}

/// Logs a warning message.
pub fn log_warn(message: &str) {
    if log_enabled!(Level::Warn) {
        warn!("{message}");
    }
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}

/// Logs a debug message.
pub fn log_debug(message: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{message}");
    }
}
