//! Physical configuration model.
//!
//! `PhyData` holds every attribute the firmware reads from its PHY block.
//! Each field is independently optional so "not set" never collapses into
//! "set to zero"; the codec only emits fields that are set. `options` is
//! the exception and always carries a value.
//!
//! Mutators return `&mut Self` so a configuration can be built fluently:
//!
//! ```rust
//! use picokey_phy::{LedDriver, PhyCurves, PhyData, PhyOptions};
//!
//! let mut phy = PhyData::new();
//! phy.set_vid_pid(0x20a0, 0x42b1)
//!     .set_led(Some(25), Some(128), Some(LedDriver::Ws2812))
//!     .set_option(PhyOptions::DIMMABLE, true)
//!     .set_curve(PhyCurves::SECP256K1, true);
//!
//! assert_eq!(phy.vendor_id(), Some(0x20a0));
//! assert!(phy.is_led_dimmable());
//! ```

use std::fmt;

use crate::phy::flags::{curve_name, LedDriver, PhyCurves, PhyOptions, PhyUsbInterfaces};
use crate::util::hex::format_vid_pid;
use crate::vendors::KnownVendor;

/// USB vendor and product id, always stored together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VidPid {
    pub vid: u16,
    pub pid: u16,
}

impl VidPid {
    pub const fn new(vid: u16, pid: u16) -> Self {
        Self { vid, pid }
    }

    /// Wire form: vid hi, vid lo, pid hi, pid lo.
    pub fn to_bytes(self) -> [u8; 4] {
        let [vh, vl] = self.vid.to_be_bytes();
        let [ph, pl] = self.pid.to_be_bytes();
        [vh, vl, ph, pl]
    }
}

impl fmt::Display for VidPid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_vid_pid(self.vid, self.pid))
    }
}

/// In-memory PHY configuration record.
///
/// `Clone` yields a fully independent value; nothing is shared between
/// copies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhyData {
    pub vid_pid: Option<VidPid>,
    pub led_gpio: Option<u8>,
    pub led_brightness: Option<u8>,
    pub options: PhyOptions,
    pub presence_timeout: Option<u8>,
    pub usb_product: Option<String>,
    pub enabled_curves: Option<PhyCurves>,
    pub enabled_usb_interfaces: Option<PhyUsbInterfaces>,
    pub led_driver: Option<LedDriver>,
}

impl PhyData {
    /// Empty record: every field unset, no option flags.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vendor_id(&self) -> Option<u16> {
        self.vid_pid.map(|p| p.vid)
    }

    pub fn product_id(&self) -> Option<u16> {
        self.vid_pid.map(|p| p.pid)
    }

    /// Set both ids at once.
    pub fn set_vid_pid(&mut self, vid: u16, pid: u16) -> &mut Self {
        self.vid_pid = Some(VidPid::new(vid, pid));
        self
    }

    /// Set the vendor id; allocates a zeroed pair if none exists yet.
    pub fn set_vendor_id(&mut self, vid: u16) -> &mut Self {
        self.vid_pid.get_or_insert_with(VidPid::default).vid = vid;
        self
    }

    /// Set the product id; allocates a zeroed pair if none exists yet.
    pub fn set_product_id(&mut self, pid: u16) -> &mut Self {
        self.vid_pid.get_or_insert_with(VidPid::default).pid = pid;
        self
    }

    pub fn set_vid_pid_from_vendor(&mut self, vendor: &KnownVendor) -> &mut Self {
        self.set_vid_pid(vendor.vid, vendor.pid)
    }

    /// Only the supplied arguments change state.
    pub fn set_led(
        &mut self,
        gpio: Option<u8>,
        brightness: Option<u8>,
        driver: Option<LedDriver>,
    ) -> &mut Self {
        if let Some(gpio) = gpio {
            self.led_gpio = Some(gpio);
        }
        if let Some(brightness) = brightness {
            self.led_brightness = Some(brightness);
        }
        if let Some(driver) = driver {
            self.led_driver = Some(driver.canonical());
        }
        self
    }

    pub fn set_presence_timeout(&mut self, seconds: u8) -> &mut Self {
        self.presence_timeout = Some(seconds);
        self
    }

    pub fn set_usb_product(&mut self, product: impl Into<String>) -> &mut Self {
        self.usb_product = Some(product.into());
        self
    }

    pub fn set_option(&mut self, flag: PhyOptions, enabled: bool) -> &mut Self {
        self.options.set(flag, enabled);
        self
    }

    /// Starts from an empty curve set if none was configured.
    pub fn set_curve(&mut self, curve: PhyCurves, enabled: bool) -> &mut Self {
        self.enabled_curves
            .get_or_insert_with(PhyCurves::empty)
            .set(curve, enabled);
        self
    }

    /// Starts from an empty interface set if none was configured.
    pub fn set_usb_interface(&mut self, itf: PhyUsbInterfaces, enabled: bool) -> &mut Self {
        self.enabled_usb_interfaces
            .get_or_insert_with(PhyUsbInterfaces::empty)
            .set(itf, enabled);
        self
    }

    pub fn is_wcid_enabled(&self) -> bool {
        self.options.contains(PhyOptions::WCID)
    }

    pub fn set_wcid_enabled(&mut self, value: bool) -> &mut Self {
        self.set_option(PhyOptions::WCID, value)
    }

    pub fn is_led_dimmable(&self) -> bool {
        self.options.contains(PhyOptions::DIMMABLE)
    }

    pub fn set_led_dimmable(&mut self, value: bool) -> &mut Self {
        self.set_option(PhyOptions::DIMMABLE, value)
    }

    pub fn is_power_reset_disabled(&self) -> bool {
        self.options.contains(PhyOptions::DISABLE_POWER_RESET)
    }

    pub fn set_power_reset_disabled(&mut self, value: bool) -> &mut Self {
        self.set_option(PhyOptions::DISABLE_POWER_RESET, value)
    }

    pub fn is_led_steady(&self) -> bool {
        self.options.contains(PhyOptions::LED_STEADY)
    }

    pub fn set_led_steady(&mut self, value: bool) -> &mut Self {
        self.set_option(PhyOptions::LED_STEADY, value)
    }

    /// False when no curve set is configured.
    pub fn has_curve(&self, curve: PhyCurves) -> bool {
        self.enabled_curves.is_some_and(|c| c.contains(curve))
    }

    pub fn has_usb_interface(&self, itf: PhyUsbInterfaces) -> bool {
        self.enabled_usb_interfaces.is_some_and(|i| i.contains(itf))
    }
}

impl fmt::Display for PhyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pair) = self.vid_pid {
            writeln!(f, "  VID:PID: {:04X}:{:04X}", pair.vid, pair.pid)?;
        }
        if let Some(gpio) = self.led_gpio {
            writeln!(f, "  LED GPIO: {gpio}")?;
        }
        if let Some(brightness) = self.led_brightness {
            writeln!(f, "  LED Brightness: {brightness}")?;
        }
        if let Some(driver) = self.led_driver {
            writeln!(f, "  LED Driver: {}", driver.name().unwrap_or("Unknown"))?;
        }
        writeln!(f, "  LED Dimmable: {}", self.is_led_dimmable())?;
        writeln!(f, "  Power Reset Disabled: {}", self.is_power_reset_disabled())?;
        writeln!(f, "  LED Steady: {}", self.is_led_steady())?;
        if let Some(timeout) = self.presence_timeout {
            writeln!(f, "  Presence Timeout: {timeout}s")?;
        }
        if let Some(product) = self.usb_product.as_deref().filter(|p| !p.is_empty()) {
            writeln!(f, "  USB Product: {product}")?;
        }
        if let Some(curves) = self.enabled_curves.filter(|c| !c.is_empty()) {
            writeln!(f, "  Enabled Curves: {:#x}", curves.bits())?;
            for curve in curves.iter() {
                if let Some(name) = curve_name(curve) {
                    writeln!(f, "    - {name} enabled")?;
                }
            }
        }
        if let Some(itf) = self.enabled_usb_interfaces {
            writeln!(f, "  USB Interfaces: {:#x}", itf.bits())?;
        }
        Ok(())
    }
}
