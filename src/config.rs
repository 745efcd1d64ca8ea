//! # Commissioning Config Files
//!
//! Human-readable JSON form of a [`PhyData`], used to save a configuration
//! and apply it to many devices later.
//!
//! ```json
//! {
//!   "vidpid": "20a0:42b1",
//!   "led_gpio": 25,
//!   "led_driver": "WS2812",
//!   "options": { "led_dimmable": true, "power_cycle_on_reset": true, "led_steady": false },
//!   "presence_timeout": 15,
//!   "secp256k1": true,
//!   "product_name": "My Key"
//! }
//! ```
//!
//! Loading is lenient: a malformed `vidpid` or an unknown LED driver name is
//! logged and ignored, and integers wider than their field keep only their
//! low bits.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::PhyError;
use crate::phy::{LedDriver, PhyCurves, PhyData, PhyOptions};
use crate::util::hex::{format_vid_pid, parse_vid_pid};

/// Option switches as presented to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsSection {
    #[serde(default)]
    pub led_dimmable: bool,
    /// Inverse of the firmware's DISABLE_POWER_RESET flag
    #[serde(default = "default_true")]
    pub power_cycle_on_reset: bool,
    #[serde(default)]
    pub led_steady: bool,
}

impl Default for OptionsSection {
    fn default() -> Self {
        Self {
            led_dimmable: false,
            power_cycle_on_reset: true,
            led_steady: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// On-disk commissioning document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhyConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vidpid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_gpio: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_brightness: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_driver: Option<String>,
    #[serde(default)]
    pub options: OptionsSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_timeout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secp256k1: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl PhyConfigFile {
    pub fn from_phy(phy: &PhyData) -> Self {
        Self {
            vidpid: phy.vid_pid.map(|p| format_vid_pid(p.vid, p.pid)),
            led_gpio: phy.led_gpio.map(i64::from),
            led_brightness: phy.led_brightness.map(i64::from),
            led_driver: phy.led_driver.and_then(LedDriver::name).map(str::to_string),
            options: OptionsSection {
                led_dimmable: phy.is_led_dimmable(),
                power_cycle_on_reset: !phy.is_power_reset_disabled(),
                led_steady: phy.is_led_steady(),
            },
            presence_timeout: phy.presence_timeout.map(i64::from),
            secp256k1: phy.enabled_curves.map(|c| c.contains(PhyCurves::SECP256K1)),
            product_name: phy.usb_product.clone().filter(|p| !p.is_empty()),
        }
    }

    pub fn to_phy(&self) -> PhyData {
        let mut phy = PhyData::new();

        if let Some(vidpid) = self.vidpid.as_deref() {
            match parse_vid_pid(vidpid) {
                Ok((vid, pid)) => {
                    phy.set_vid_pid(vid, pid);
                }
                Err(e) => warn!("Ignoring vidpid in config: {e}"),
            }
        }

        phy.set_led(
            self.led_gpio.map(low_byte),
            self.led_brightness.map(low_byte),
            None,
        );

        if let Some(name) = self.led_driver.as_deref() {
            match LedDriver::from_name(name) {
                Some(driver) => {
                    phy.set_led(None, None, Some(driver));
                }
                None => warn!("Ignoring unknown LED driver '{name}' in config"),
            }
        }

        if self.options.led_dimmable {
            phy.set_option(PhyOptions::DIMMABLE, true);
        }
        if !self.options.power_cycle_on_reset {
            phy.set_option(PhyOptions::DISABLE_POWER_RESET, true);
        }
        if self.options.led_steady {
            phy.set_option(PhyOptions::LED_STEADY, true);
        }

        if let Some(timeout) = self.presence_timeout {
            phy.set_presence_timeout(low_byte(timeout));
        }
        if self.secp256k1 == Some(true) {
            phy.set_curve(PhyCurves::SECP256K1, true);
        }
        if let Some(product) = self.product_name.as_deref().filter(|p| !p.is_empty()) {
            phy.set_usb_product(product);
        }

        phy
    }

    pub fn to_json(&self) -> Result<String, PhyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PhyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config document from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PhyError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the config document as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PhyError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn low_byte(value: i64) -> u8 {
    (value & 0xFF) as u8
}

/// Load a JSON config file straight into a [`PhyData`].
pub fn load_phy<P: AsRef<Path>>(path: P) -> Result<PhyData, PhyError> {
    Ok(PhyConfigFile::load(path)?.to_phy())
}

/// Save a [`PhyData`] as a JSON config file.
pub fn save_phy<P: AsRef<Path>>(phy: &PhyData, path: P) -> Result<(), PhyError> {
    PhyConfigFile::from_phy(phy).save(path)
}
