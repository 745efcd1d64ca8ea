//! Bitmask and enumerated field types of the PHY data block.
//!
//! Bit positions match the wire table exactly. Unknown bits read from a
//! device are retained so a decode/encode cycle never drops them.

use std::hash::{Hash, Hasher};

use bitflags::bitflags;

bitflags! {
    /// Option flags (tag 0x06, big-endian u16)
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PhyOptions: u16 {
        /// Expose the WCID descriptor
        const WCID                = 0x0001;
        /// LED supports brightness control
        const DIMMABLE            = 0x0002;
        /// Do not reset on a power cycle
        const DISABLE_POWER_RESET = 0x0004;
        /// LED stays on instead of blinking
        const LED_STEADY          = 0x0008;
    }
}

bitflags! {
    /// Elliptic curves the firmware may use (tag 0x0A, big-endian u32)
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PhyCurves: u32 {
        const SECP256R1  = 1 << 0;
        const SECP384R1  = 1 << 1;
        const SECP521R1  = 1 << 2;
        const SECP256K1  = 1 << 3;
        const BP256R1    = 1 << 4;
        const BP384R1    = 1 << 5;
        const BP512R1    = 1 << 6;
        const ED25519    = 1 << 7;
        const ED448      = 1 << 8;
        const CURVE25519 = 1 << 9;
        const CURVE448   = 1 << 10;
    }
}

bitflags! {
    /// USB interfaces presented by the device (tag 0x0B)
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PhyUsbInterfaces: u8 {
        const CCID     = 0x01;
        const WCID     = 0x02;
        const HID      = 0x04;
        const KEYBOARD = 0x08;
    }
}

impl Default for PhyOptions {
    fn default() -> Self {
        PhyOptions::empty()
    }
}

impl PhyUsbInterfaces {
    /// Value assumed when a device's PHY block carries no interface record.
    pub const DEFAULT_ENABLED: PhyUsbInterfaces = PhyUsbInterfaces::CCID
        .union(PhyUsbInterfaces::WCID)
        .union(PhyUsbInterfaces::HID)
        .union(PhyUsbInterfaces::KEYBOARD);
}

/// LED driver selector (tag 0x0C).
///
/// Raw values the crate does not know about are kept in `Other`. Drivers are
/// compared and hashed by wire value, so `Other(0x03)` equals `Ws2812`.
#[derive(Debug, Clone, Copy)]
pub enum LedDriver {
    Pico,
    Pimoroni,
    Ws2812,
    Cyw43,
    Neopixel,
    None,
    Other(u8),
}

impl LedDriver {
    /// Named drivers in presentation order.
    pub const NAMED: [LedDriver; 6] = [
        LedDriver::Pico,
        LedDriver::Pimoroni,
        LedDriver::Ws2812,
        LedDriver::Cyw43,
        LedDriver::Neopixel,
        LedDriver::None,
    ];

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x01 => LedDriver::Pico,
            0x02 => LedDriver::Pimoroni,
            0x03 => LedDriver::Ws2812,
            0x04 => LedDriver::Cyw43,
            0x05 => LedDriver::Neopixel,
            crate::constants::PHY_LED_DRIVER_NONE => LedDriver::None,
            other => LedDriver::Other(other),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            LedDriver::Pico => 0x01,
            LedDriver::Pimoroni => 0x02,
            LedDriver::Ws2812 => 0x03,
            LedDriver::Cyw43 => 0x04,
            LedDriver::Neopixel => 0x05,
            LedDriver::None => crate::constants::PHY_LED_DRIVER_NONE,
            LedDriver::Other(raw) => raw,
        }
    }

    /// Named variant for this wire value, `Other` only for unknown values.
    pub fn canonical(self) -> Self {
        Self::from_raw(self.raw())
    }

    /// Upper-case name used in config files, `None` for unknown raw values.
    pub fn name(self) -> Option<&'static str> {
        match self.canonical() {
            LedDriver::Pico => Some("PICO"),
            LedDriver::Pimoroni => Some("PIMORONI"),
            LedDriver::Ws2812 => Some("WS2812"),
            LedDriver::Cyw43 => Some("CYW43"),
            LedDriver::Neopixel => Some("NEOPIXEL"),
            LedDriver::None => Some("NONE"),
            LedDriver::Other(_) => None,
        }
    }

    /// Exact, case-sensitive lookup by upper-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .copied()
            .find(|driver| driver.name() == Some(name))
    }
}

impl PartialEq for LedDriver {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for LedDriver {}

impl Hash for LedDriver {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl From<u8> for LedDriver {
    fn from(raw: u8) -> Self {
        LedDriver::from_raw(raw)
    }
}

impl From<LedDriver> for u8 {
    fn from(driver: LedDriver) -> Self {
        driver.raw()
    }
}

/// Lower-case curve name as shown to users.
pub fn curve_name(curve: PhyCurves) -> Option<&'static str> {
    PhyCurves::all()
        .iter_names()
        .find(|(_, flag)| *flag == curve)
        .map(|(name, _)| match name {
            "SECP256R1" => "secp256r1",
            "SECP384R1" => "secp384r1",
            "SECP521R1" => "secp521r1",
            "SECP256K1" => "secp256k1",
            "BP256R1" => "brainpoolP256r1",
            "BP384R1" => "brainpoolP384r1",
            "BP512R1" => "brainpoolP512r1",
            "ED25519" => "ed25519",
            "ED448" => "ed448",
            "CURVE25519" => "curve25519",
            _ => "curve448",
        })
}
