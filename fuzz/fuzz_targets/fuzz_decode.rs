#![no_main]

use libfuzzer_sys::fuzz_target;
use picokey_phy::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // The decoder accepts any input
    let phy = decode(data);
    assert!(phy.enabled_usb_interfaces.is_some());

    // What was understood survives a second pass. Empty product strings are
    // not re-emitted and unterminated 255-byte ones lose their last byte.
    let again = decode(&encode(&phy));
    let product_stable = phy
        .usb_product
        .as_ref()
        .map_or(true, |p| !p.is_empty() && p.len() <= 254);
    if product_stable {
        assert_eq!(again, phy);
    }

    for n in 0..data.len().min(64) {
        let _ = decode(&data[..n]);
    }
});
