//! Unit tests for the logging functionality in the `picokey-phy` crate.

use picokey_phy::logging::{
    init_logger, init_logger_with_filter, log_debug, log_error, log_info, log_warn,
};

/// Logging helpers must not panic, with or without an initialized logger.
#[test]
fn test_logging() {
    log_error("This is an error message");
    log_warn("This is a warning message");
    log_info("This is an info message");
    log_debug("This is a debug message");
}

/// The logger can be initialized more than once.
#[test]
fn test_init_logger_twice() {
    init_logger();
    init_logger();
    init_logger_with_filter("debug");
    log_info("logger initialized");
}
