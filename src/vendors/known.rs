//! Known USB vendor identities a PicoKey can be commissioned as.
//!
//! The table is fixed at compile time and listed in a stable order; a
//! name index is built once on first lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::PhyError;

/// A named VID:PID pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVendor {
    pub name: &'static str,
    pub vid: u16,
    pub pid: u16,
}

impl KnownVendor {
    pub const fn new(name: &'static str, vid: u16, pid: u16) -> Self {
        Self { name, vid, pid }
    }

    pub fn vid_pid(&self) -> (u16, u16) {
        (self.vid, self.pid)
    }
}

pub static KNOWN_VENDORS: [KnownVendor; 11] = [
    KnownVendor::new("Nitrokey HSM", 0x20a0, 0x4230),
    KnownVendor::new("Nitrokey FIDO2", 0x20a0, 0x42b1),
    KnownVendor::new("Nitrokey Pro", 0x20a0, 0x4108),
    KnownVendor::new("Nitrokey 3", 0x20a0, 0x42b2),
    KnownVendor::new("Nitrokey Start", 0x20a0, 0x4211),
    KnownVendor::new("Yubikey 4/5", 0x1050, 0x0407),
    KnownVendor::new("Yubikey NEO", 0x1050, 0x0116),
    KnownVendor::new("Yubico YubiHSM", 0x1050, 0x0030),
    KnownVendor::new("FSIJ Gnuk", 0x234b, 0x0000),
    KnownVendor::new("GnuPG e.V.", 0x1209, 0x2440),
    KnownVendor::new("Pico Default", 0xfeff, 0xfcfd),
];

static VENDOR_INDEX: Lazy<HashMap<&'static str, &'static KnownVendor>> =
    Lazy::new(|| KNOWN_VENDORS.iter().map(|v| (v.name, v)).collect());

/// All vendor names in table order.
pub fn vendor_names() -> impl Iterator<Item = &'static str> {
    KNOWN_VENDORS.iter().map(|v| v.name)
}

/// All vendors in table order.
pub fn all_vendors() -> &'static [KnownVendor] {
    &KNOWN_VENDORS
}

/// Look up a vendor by exact name.
pub fn resolve_vendor(name: &str) -> Result<&'static KnownVendor, PhyError> {
    VENDOR_INDEX
        .get(name)
        .copied()
        .ok_or_else(|| PhyError::UnknownVendor(name.to_string()))
}

/// Name of the vendor owning a VID:PID pair, if any.
pub fn vendor_for_ids(vid: u16, pid: u16) -> Option<&'static KnownVendor> {
    KNOWN_VENDORS.iter().find(|v| v.vid == vid && v.pid == pid)
}
