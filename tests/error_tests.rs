//! Unit tests for the `PhyError` enum and its `Display` output.

use picokey_phy::error::PhyError;

/// Tests that the `UnknownVendor` variant is correctly formatted.
#[test]
fn test_unknown_vendor_error() {
    let err = PhyError::UnknownVendor("Acme".to_string());
    assert_eq!(err.to_string(), "Unknown vendor: Acme");
}

/// Tests that the `InvalidVidPid` variant names the offending input.
#[test]
fn test_invalid_vidpid_error() {
    let err = PhyError::InvalidVidPid("12:34".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid VID:PID '12:34', expected 4 hex digits, a colon and 4 hex digits"
    );
}

/// Tests that the `UnknownLedDriver` variant is correctly formatted.
#[test]
fn test_unknown_led_driver_error() {
    let err = PhyError::UnknownLedDriver("BLINKY".to_string());
    assert_eq!(err.to_string(), "Unknown LED driver: BLINKY");
}

/// Tests that the `Transport` variant is correctly formatted.
#[test]
fn test_transport_error() {
    let err = PhyError::Transport("device unplugged".to_string());
    assert_eq!(err.to_string(), "Transport error: device unplugged");
}

/// Tests that I/O errors convert into `PhyError::Io`.
#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: PhyError = io.into();
    assert!(matches!(err, PhyError::Io(_)));
    assert_eq!(err.to_string(), "I/O error: missing");
}
