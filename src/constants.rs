//! PHY Data Wire Constants
//!
//! Raw tag identifiers, payload widths and limits of the PicoKey physical
//! configuration block as the firmware reads it at boot.

/// VID/PID pair (vid hi, vid lo, pid hi, pid lo)
pub const PHY_TAG_VIDPID: u8 = 0x00;

/// LED GPIO pin number
pub const PHY_TAG_LED_GPIO: u8 = 0x04;

/// LED brightness (0 = off)
pub const PHY_TAG_LED_BRIGHTNESS: u8 = 0x05;

/// Option bitmask, big-endian u16
pub const PHY_TAG_OPTIONS: u8 = 0x06;

/// Presence button timeout in seconds
pub const PHY_TAG_PRESENCE_TIMEOUT: u8 = 0x08;

/// USB product string, null terminated
pub const PHY_TAG_USB_PRODUCT: u8 = 0x09;

/// Enabled curves bitmask, big-endian u32
pub const PHY_TAG_ENABLED_CURVES: u8 = 0x0A;

/// Enabled USB interfaces bitmask
pub const PHY_TAG_ENABLED_USB_ITF: u8 = 0x0B;

/// LED driver selector
pub const PHY_TAG_LED_DRIVER: u8 = 0x0C;

// Payload widths
pub const PHY_VIDPID_LEN: usize = 4;
pub const PHY_U8_LEN: usize = 1;
pub const PHY_OPTIONS_LEN: usize = 2;
pub const PHY_CURVES_LEN: usize = 4;

/// Tag byte + length byte
pub const PHY_TLV_HEADER_LEN: usize = 2;

/// Longest product string that still fits a one-byte length with its terminator
pub const PHY_USB_PRODUCT_MAX_LEN: usize = 254;

/// Product names longer than this are shortened by front ends before commissioning
pub const PHY_USB_PRODUCT_DISPLAY_LEN: usize = 14;

/// LED driver raw value meaning "no LED"
pub const PHY_LED_DRIVER_NONE: u8 = 0xFF;

/// Default file name for saved commissioning configs
pub const DEFAULT_CONFIG_FILE: &str = "commission_config.json";
