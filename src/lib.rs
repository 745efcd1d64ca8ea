//! # picokey-phy - PicoKey Physical Configuration Records
//!
//! A PicoKey reads a compact tag-length-value block ("PHY data") at boot to
//! learn its USB identity, LED wiring, option switches, enabled curves and
//! USB interfaces. This crate builds that block, encodes it to bytes and
//! decodes bytes read back from a device.
//!
//! ## Features
//!
//! - Typed, optional-per-field model of the configuration (`PhyData`)
//! - Lenient TLV decoder that never fails on unknown, mismatched or truncated records
//! - Registry of known vendor VID:PID identities
//! - JSON commissioning documents for saving and re-applying configurations
//! - A transport trait for plugging in a device connection
//!
//! ## Usage
//!
//! ```rust
//! use picokey_phy::{decode, encode, resolve_vendor, PhyCurves, PhyData};
//!
//! let vendor = resolve_vendor("Pico Default").unwrap();
//!
//! let mut phy = PhyData::new();
//! phy.set_vid_pid_from_vendor(vendor)
//!     .set_presence_timeout(15)
//!     .set_curve(PhyCurves::ED25519, true);
//!
//! let bytes = encode(&phy);
//! let back = decode(&bytes);
//! assert_eq!(back.vid_pid, phy.vid_pid);
//! ```

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod logging;
pub mod phy;
pub mod util;
pub mod vendors;

pub use crate::error::PhyError;
pub use crate::logging::{init_logger, log_info};

// Core PHY types
pub use phy::{
    decode, encode, LedDriver, PhyCurves, PhyData, PhyOptions, PhyTag, PhyUsbInterfaces, VidPid,
};

// Vendor registry
pub use vendors::{resolve_vendor, vendor_names, KnownVendor};

// Persistence and transport seams
pub use config::PhyConfigFile;
pub use device::{apply_config, read_config, MemoryTransport, PhyTransport};
