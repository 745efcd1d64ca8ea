//! # PHY Data TLV Codec
//!
//! Encodes a [`PhyData`] into the tag-length-value block the firmware reads
//! at boot, and decodes such a block back into a [`PhyData`].
//!
//! ## Wire format
//!
//! A plain sequence of `[tag, length, payload...]` records with no header,
//! footer or terminator. Multi-byte integers are big-endian.
//!
//! ## Leniency
//!
//! Decoding never fails. Unknown tags, and known tags whose length does not
//! match the registry width, are skipped. A record whose length runs past
//! the end of the buffer ends the scan. This lets older and newer firmware
//! blocks be read, at the price of silently dropping what is not understood.
//! The skip is intentional and kept for compatibility with existing tooling;
//! it is visible only in the debug log.
//!
//! ```rust
//! use picokey_phy::{decode, encode, PhyData};
//!
//! let mut phy = PhyData::new();
//! phy.set_vid_pid(0x1050, 0x0407).set_presence_timeout(15);
//!
//! let bytes = encode(&phy);
//! assert_eq!(&bytes[..6], &[0x00, 0x04, 0x10, 0x50, 0x04, 0x07]);
//!
//! let back = decode(&bytes);
//! assert_eq!(back.vendor_id(), Some(0x1050));
//! ```

use bytes::{BufMut, BytesMut};
use log::{debug, trace};
use nom::number::complete::{be_u16, be_u32, be_u8};
use nom::IResult;

use crate::constants::*;
use crate::phy::data::{PhyData, VidPid};
use crate::phy::flags::{LedDriver, PhyCurves, PhyOptions, PhyUsbInterfaces};
use crate::phy::tag::{lookup_tag, PhyTag};

/// Serialize a configuration in canonical field order.
///
/// Unset fields are omitted except `options`, which is always written.
/// An empty product string is not written.
pub fn encode(phy: &PhyData) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(64);

    if let Some(pair) = phy.vid_pid {
        put_record(&mut buf, PhyTag::VidPid, &pair.to_bytes());
    }
    if let Some(gpio) = phy.led_gpio {
        put_record(&mut buf, PhyTag::LedGpio, &[gpio]);
    }
    if let Some(brightness) = phy.led_brightness {
        put_record(&mut buf, PhyTag::LedBrightness, &[brightness]);
    }
    put_record(&mut buf, PhyTag::Options, &phy.options.bits().to_be_bytes());
    if let Some(timeout) = phy.presence_timeout {
        put_record(&mut buf, PhyTag::PresenceTimeout, &[timeout]);
    }
    if let Some(product) = phy.usb_product.as_deref().filter(|p| !p.is_empty()) {
        let mut payload = product_payload(product);
        payload.push(0x00);
        put_record(&mut buf, PhyTag::UsbProduct, &payload);
    }
    if let Some(curves) = phy.enabled_curves {
        put_record(&mut buf, PhyTag::EnabledCurves, &curves.bits().to_be_bytes());
    }
    if let Some(itf) = phy.enabled_usb_interfaces {
        put_record(&mut buf, PhyTag::EnabledUsbInterfaces, &[itf.bits()]);
    }
    if let Some(driver) = phy.led_driver {
        put_record(&mut buf, PhyTag::LedDriver, &[driver.raw()]);
    }

    buf.to_vec()
}

/// Parse a PHY block, keeping whatever records could be read.
///
/// If no interface record was seen, `enabled_usb_interfaces` is filled with
/// all four interfaces, matching what the firmware assumes.
pub fn decode(data: &[u8]) -> PhyData {
    let mut phy = PhyData::new();
    let mut pos = 0usize;

    while data.len() - pos >= PHY_TLV_HEADER_LEN {
        let id = data[pos];
        let len = data[pos + 1] as usize;
        pos += PHY_TLV_HEADER_LEN;

        let Some(payload) = data.get(pos..pos + len) else {
            debug!(
                "PHY record 0x{id:02X} claims {len} bytes, only {} left; stopping",
                data.len() - pos
            );
            break;
        };
        pos += len;

        match lookup_tag(id) {
            Some(info) if info.width.accepts(len) => {
                if decode_field(&mut phy, info.tag, payload).is_err() {
                    debug!("PHY record {} could not be parsed", info.name);
                }
            }
            Some(info) => {
                debug!("Skipping PHY record {} with unexpected length {len}", info.name);
            }
            None => {
                trace!("Skipping unknown PHY tag 0x{id:02X} ({len} bytes)");
            }
        }
    }

    if phy.enabled_usb_interfaces.is_none() {
        phy.enabled_usb_interfaces = Some(PhyUsbInterfaces::DEFAULT_ENABLED);
    }

    phy
}

fn put_record(buf: &mut BytesMut, tag: PhyTag, payload: &[u8]) {
    // Payloads are at most 255 bytes by construction.
    trace!("Writing PHY record {} ({} bytes)", tag.name(), payload.len());
    buf.put_u8(tag.id());
    buf.put_u8(payload.len() as u8);
    buf.put_slice(payload);
}

/// ASCII bytes of a product name, non-ASCII characters dropped, capped so
/// the terminator still fits a one-byte length.
fn product_payload(product: &str) -> Vec<u8> {
    product
        .bytes()
        .filter(u8::is_ascii)
        .take(PHY_USB_PRODUCT_MAX_LEN)
        .collect()
}

/// Text up to the first null byte, non-ASCII bytes dropped.
fn product_from_payload(payload: &[u8]) -> String {
    payload
        .iter()
        .take_while(|&&b| b != 0x00)
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

/// Store one record whose length has already been checked.
fn decode_field<'a>(phy: &mut PhyData, tag: PhyTag, payload: &'a [u8]) -> IResult<&'a [u8], ()> {
    let rest = match tag {
        PhyTag::VidPid => {
            let (rest, vid) = be_u16(payload)?;
            let (rest, pid) = be_u16(rest)?;
            phy.vid_pid = Some(VidPid::new(vid, pid));
            rest
        }
        PhyTag::LedGpio => {
            let (rest, gpio) = be_u8(payload)?;
            phy.led_gpio = Some(gpio);
            rest
        }
        PhyTag::LedBrightness => {
            let (rest, brightness) = be_u8(payload)?;
            phy.led_brightness = Some(brightness);
            rest
        }
        PhyTag::Options => {
            let (rest, bits) = be_u16(payload)?;
            phy.options = PhyOptions::from_bits_retain(bits);
            rest
        }
        PhyTag::PresenceTimeout => {
            let (rest, timeout) = be_u8(payload)?;
            phy.presence_timeout = Some(timeout);
            rest
        }
        PhyTag::UsbProduct => {
            phy.usb_product = Some(product_from_payload(payload));
            &payload[payload.len()..]
        }
        PhyTag::EnabledCurves => {
            let (rest, bits) = be_u32(payload)?;
            phy.enabled_curves = Some(PhyCurves::from_bits_retain(bits));
            rest
        }
        PhyTag::EnabledUsbInterfaces => {
            let (rest, bits) = be_u8(payload)?;
            phy.enabled_usb_interfaces = Some(PhyUsbInterfaces::from_bits_retain(bits));
            rest
        }
        PhyTag::LedDriver => {
            let (rest, raw) = be_u8(payload)?;
            phy.led_driver = Some(LedDriver::from_raw(raw));
            rest
        }
    };
    Ok((rest, ()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::proptest;

    fn full_config() -> PhyData {
        let mut phy = PhyData::new();
        phy.set_vid_pid(0x20a0, 0x42b1)
            .set_led(Some(25), Some(128), Some(LedDriver::Ws2812))
            .set_option(PhyOptions::DIMMABLE, true)
            .set_presence_timeout(15)
            .set_usb_product("PicoKey")
            .set_curve(PhyCurves::SECP256R1, true)
            .set_curve(PhyCurves::SECP256K1, true)
            .set_usb_interface(PhyUsbInterfaces::CCID, true)
            .set_usb_interface(PhyUsbInterfaces::HID, true);
        phy
    }

    #[test]
    fn test_encode_full_layout() {
        let bytes = encode(&full_config());
        let expected: Vec<u8> = [
            &[0x00, 0x04, 0x20, 0xA0, 0x42, 0xB1][..],
            &[0x04, 0x01, 25],
            &[0x05, 0x01, 128],
            &[0x06, 0x02, 0x00, 0x02],
            &[0x08, 0x01, 15],
            &[0x09, 0x08, b'P', b'i', b'c', b'o', b'K', b'e', b'y', 0x00],
            &[0x0A, 0x04, 0x00, 0x00, 0x00, 0x09],
            &[0x0B, 0x01, 0x05],
            &[0x0C, 0x01, 0x03],
        ]
        .concat();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_encode_empty_emits_options_only() {
        assert_eq!(encode(&PhyData::new()), vec![0x06, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_skips_empty_product() {
        let mut phy = PhyData::new();
        phy.set_usb_product("");
        assert_eq!(encode(&phy), vec![0x06, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_product_drops_non_ascii() {
        let mut phy = PhyData::new();
        phy.set_usb_product("Kéy");
        let bytes = encode(&phy);
        assert_eq!(&bytes[4..], &[0x09, 0x03, b'K', b'y', 0x00]);
    }

    #[test]
    fn test_encode_product_truncated_to_fit() {
        let mut phy = PhyData::new();
        phy.set_usb_product("x".repeat(300));
        let bytes = encode(&phy);
        assert_eq!(bytes[4], 0x09);
        assert_eq!(bytes[5], 255);
        assert_eq!(bytes.len(), 4 + 2 + 255);
        assert_eq!(*bytes.last().unwrap(), 0x00);

        let back = decode(&bytes);
        assert_eq!(back.usb_product, Some("x".repeat(254)));
    }

    #[test]
    fn test_round_trip_full() {
        let phy = full_config();
        assert_eq!(decode(&encode(&phy)), phy);
    }

    #[test]
    fn test_decode_empty() {
        let phy = decode(&[]);
        let mut expected = PhyData::new();
        expected.enabled_usb_interfaces = Some(PhyUsbInterfaces::DEFAULT_ENABLED);
        assert_eq!(phy, expected);
    }

    #[test]
    fn test_decode_single_byte() {
        let phy = decode(&[0x04]);
        assert_eq!(phy.led_gpio, None);
        assert_eq!(phy.enabled_usb_interfaces, Some(PhyUsbInterfaces::DEFAULT_ENABLED));
    }

    #[test]
    fn test_decode_skips_unknown_tag() {
        let data = [0x7F, 0x03, 0xAA, 0xBB, 0xCC, 0x04, 0x01, 0x10];
        let phy = decode(&data);
        assert_eq!(phy.led_gpio, Some(0x10));
    }

    #[test]
    fn test_decode_skips_length_mismatch() {
        // LED GPIO with a 2-byte payload, then a valid brightness record
        let data = [0x04, 0x02, 0x01, 0x02, 0x05, 0x01, 0x40];
        let phy = decode(&data);
        assert_eq!(phy.led_gpio, None);
        assert_eq!(phy.led_brightness, Some(0x40));
    }

    #[test]
    fn test_decode_stops_on_overlong_record() {
        let data = [0x04, 0x01, 0x07, 0x0A, 0x04, 0x00, 0x00];
        let phy = decode(&data);
        assert_eq!(phy.led_gpio, Some(0x07));
        assert_eq!(phy.enabled_curves, None);
    }

    #[test]
    fn test_decode_product_split_at_null() {
        let data = [0x09, 0x06, b'A', b'B', 0x00, b'C', b'D', 0x00];
        assert_eq!(decode(&data).usb_product.as_deref(), Some("AB"));
    }

    #[test]
    fn test_decode_product_without_null() {
        let data = [0x09, 0x03, b'A', 0xC3, b'B'];
        assert_eq!(decode(&data).usb_product.as_deref(), Some("AB"));
    }

    #[test]
    fn test_decode_zero_length_product_skipped() {
        let data = [0x09, 0x00, 0x04, 0x01, 0x02];
        let phy = decode(&data);
        assert_eq!(phy.usb_product, None);
        assert_eq!(phy.led_gpio, Some(0x02));
    }

    #[test]
    fn test_decode_keeps_explicit_interfaces() {
        let phy = decode(&[0x0B, 0x01, 0x00]);
        assert_eq!(phy.enabled_usb_interfaces, Some(PhyUsbInterfaces::empty()));
    }

    #[test]
    fn test_decode_last_record_wins() {
        let data = [0x05, 0x01, 0x10, 0x05, 0x01, 0x20];
        assert_eq!(decode(&data).led_brightness, Some(0x20));
    }

    #[test]
    fn test_decode_unknown_driver_preserved() {
        let phy = decode(&[0x0C, 0x01, 0x42]);
        assert_eq!(phy.led_driver, Some(LedDriver::Other(0x42)));
        assert_eq!(encode(&phy)[4..], [0x0B, 0x01, 0x0F, 0x0C, 0x01, 0x42]);
    }

    prop_compose! {
        fn arb_phy()(
            vid in any::<u16>(),
            pid in any::<u16>(),
            gpio in any::<u8>(),
            brightness in any::<u8>(),
            options in any::<u16>(),
            timeout in any::<u8>(),
            product in "[!-~][ -~]{0,60}",
            curves in any::<u32>(),
            itf in any::<u8>(),
            driver in any::<u8>(),
        ) -> PhyData {
            let mut phy = PhyData::new();
            phy.set_vid_pid(vid, pid)
                .set_led(Some(gpio), Some(brightness), Some(LedDriver::from_raw(driver)))
                .set_presence_timeout(timeout)
                .set_usb_product(product);
            phy.options = PhyOptions::from_bits_retain(options);
            phy.enabled_curves = Some(PhyCurves::from_bits_retain(curves));
            phy.enabled_usb_interfaces = Some(PhyUsbInterfaces::from_bits_retain(itf));
            phy
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip(phy in arb_phy()) {
            prop_assert_eq!(decode(&encode(&phy)), phy);
        }

        #[test]
        fn prop_prefix_is_subset(phy in arb_phy(), cut in 0usize..400) {
            let bytes = encode(&phy);
            let n = cut.min(bytes.len());
            let partial = decode(&bytes[..n]);

            prop_assert!(partial.vid_pid.is_none() || partial.vid_pid == phy.vid_pid);
            prop_assert!(partial.led_gpio.is_none() || partial.led_gpio == phy.led_gpio);
            prop_assert!(partial.led_brightness.is_none() || partial.led_brightness == phy.led_brightness);
            prop_assert!(partial.options.is_empty() || partial.options == phy.options);
            prop_assert!(partial.presence_timeout.is_none() || partial.presence_timeout == phy.presence_timeout);
            prop_assert!(partial.usb_product.is_none() || partial.usb_product == phy.usb_product);
            prop_assert!(partial.enabled_curves.is_none() || partial.enabled_curves == phy.enabled_curves);
            prop_assert!(partial.led_driver.is_none() || partial.led_driver == phy.led_driver);
        }

        #[test]
        fn prop_decode_arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..300)) {
            let phy = decode(&data);
            prop_assert!(phy.enabled_usb_interfaces.is_some());
        }
    }
}
