//! Tag registry for PHY data TLV records.
//!
//! Maps each tag byte to the field it carries and the payload width the
//! decoder expects. Unknown tag bytes simply have no entry; the decoder
//! skips them.

use crate::constants::*;

/// Known PHY data tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhyTag {
    VidPid,
    LedGpio,
    LedBrightness,
    Options,
    PresenceTimeout,
    UsbProduct,
    EnabledCurves,
    EnabledUsbInterfaces,
    LedDriver,
}

/// Expected payload width of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagWidth {
    /// Payload must be exactly this many bytes.
    Fixed(usize),
    /// Any non-empty payload (null-terminated strings).
    Variable,
}

impl TagWidth {
    pub fn accepts(self, len: usize) -> bool {
        match self {
            TagWidth::Fixed(n) => len == n,
            TagWidth::Variable => len > 0,
        }
    }
}

/// Registry entry for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub tag: PhyTag,
    pub id: u8,
    pub name: &'static str,
    pub width: TagWidth,
}

/// All known tags in canonical encode order.
pub static TAG_REGISTRY: [TagInfo; 9] = [
    TagInfo { tag: PhyTag::VidPid, id: PHY_TAG_VIDPID, name: "VID/PID", width: TagWidth::Fixed(PHY_VIDPID_LEN) },
    TagInfo { tag: PhyTag::LedGpio, id: PHY_TAG_LED_GPIO, name: "LED GPIO", width: TagWidth::Fixed(PHY_U8_LEN) },
    TagInfo { tag: PhyTag::LedBrightness, id: PHY_TAG_LED_BRIGHTNESS, name: "LED brightness", width: TagWidth::Fixed(PHY_U8_LEN) },
    TagInfo { tag: PhyTag::Options, id: PHY_TAG_OPTIONS, name: "Options", width: TagWidth::Fixed(PHY_OPTIONS_LEN) },
    TagInfo { tag: PhyTag::PresenceTimeout, id: PHY_TAG_PRESENCE_TIMEOUT, name: "Presence timeout", width: TagWidth::Fixed(PHY_U8_LEN) },
    TagInfo { tag: PhyTag::UsbProduct, id: PHY_TAG_USB_PRODUCT, name: "USB product", width: TagWidth::Variable },
    TagInfo { tag: PhyTag::EnabledCurves, id: PHY_TAG_ENABLED_CURVES, name: "Enabled curves", width: TagWidth::Fixed(PHY_CURVES_LEN) },
    TagInfo { tag: PhyTag::EnabledUsbInterfaces, id: PHY_TAG_ENABLED_USB_ITF, name: "Enabled USB interfaces", width: TagWidth::Fixed(PHY_U8_LEN) },
    TagInfo { tag: PhyTag::LedDriver, id: PHY_TAG_LED_DRIVER, name: "LED driver", width: TagWidth::Fixed(PHY_U8_LEN) },
];

impl PhyTag {
    /// Look up a tag by its wire byte.
    pub fn from_id(id: u8) -> Option<PhyTag> {
        lookup_tag(id).map(|info| info.tag)
    }

    /// Registry entry for this tag.
    pub fn info(self) -> &'static TagInfo {
        // Every variant has exactly one entry, in declaration order.
        &TAG_REGISTRY[self as usize]
    }

    pub fn id(self) -> u8 {
        self.info().id
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn width(self) -> TagWidth {
        self.info().width
    }
}

/// Find the registry entry for a wire tag byte.
pub fn lookup_tag(id: u8) -> Option<&'static TagInfo> {
    TAG_REGISTRY.iter().find(|info| info.id == id)
}
