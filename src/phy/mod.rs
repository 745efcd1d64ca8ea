//! # PHY Data
//!
//! The physical configuration block of a PicoKey: its tag registry, field
//! types, in-memory model and TLV codec.

pub mod codec;
pub mod data;
pub mod flags;
pub mod tag;

pub use codec::{decode, encode};
pub use data::{PhyData, VidPid};
pub use flags::{curve_name, LedDriver, PhyCurves, PhyOptions, PhyUsbInterfaces};
pub use tag::{lookup_tag, PhyTag, TagInfo, TagWidth, TAG_REGISTRY};
