//! # Known-Vendor Registry
//!
//! Read-only table of vendor identities used to pre-fill the VID:PID pair of
//! a [`PhyData`](crate::PhyData). The registry is not part of the wire
//! format; the device only ever sees the resulting ids.
//!
//! ```rust
//! use picokey_phy::vendors::resolve_vendor;
//!
//! let yubikey = resolve_vendor("Yubikey 4/5").unwrap();
//! assert_eq!((yubikey.vid, yubikey.pid), (0x1050, 0x0407));
//! assert!(resolve_vendor("Nope").is_err());
//! ```

pub mod known;

pub use known::{all_vendors, resolve_vendor, vendor_for_ids, vendor_names, KnownVendor, KNOWN_VENDORS};
