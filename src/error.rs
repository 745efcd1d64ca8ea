//! # PHY Error Handling
//!
//! This module defines the PhyError enum, which represents the different error
//! types that can occur in the picokey-phy crate.
//!
//! Encoding and decoding PHY data never fail; these errors come from the
//! glue around the codec (vendor lookup, VID:PID strings, config files and
//! device transports).

use thiserror::Error;

/// Represents the different error types that can occur in the PHY crate.
#[derive(Debug, Error)]
pub enum PhyError {
    /// Vendor name is not in the known-vendor table.
    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),

    /// VID:PID string does not match the `xxxx:xxxx` hex form.
    #[error("Invalid VID:PID '{0}', expected 4 hex digits, a colon and 4 hex digits")]
    InvalidVidPid(String),

    /// LED driver name is not one of the known drivers.
    #[error("Unknown LED driver: {0}")]
    UnknownLedDriver(String),

    /// Indicates an invalid hexadecimal string was provided.
    #[error("Invalid hexadecimal string: {0}")]
    InvalidHexString(String),

    /// Config file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not a valid JSON document.
    #[error("Config format error: {0}")]
    Json(#[from] serde_json::Error),

    /// The device transport reported a failure.
    #[error("Transport error: {0}")]
    Transport(String),
}
