//! # Hex Encoding/Decoding Utilities
//!
//! Hex helpers for the CLI and for logging PHY blocks, plus the `xxxx:xxxx`
//! VID:PID notation used in config files.
//!
//! ```rust
//! use picokey_phy::util::hex::{decode_hex, encode_hex, parse_vid_pid};
//!
//! let data = [0x06, 0x02, 0x00, 0x00];
//! assert_eq!(encode_hex(&data), "06020000");
//! assert_eq!(decode_hex("06 02 00 00").unwrap(), data);
//! assert_eq!(parse_vid_pid("20a0:42b1").unwrap(), (0x20a0, 0x42b1));
//! ```

use crate::error::PhyError;

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is automatically stripped; an empty string is an empty buffer.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, PhyError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    hex::decode(&cleaned).map_err(|e| PhyError::InvalidHexString(e.to_string()))
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "06 02 00 00" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `vvvv:pppp` (exactly four hex digits each side).
pub fn parse_vid_pid(input: &str) -> Result<(u16, u16), PhyError> {
    let invalid = || PhyError::InvalidVidPid(input.to_string());

    let (vid, pid) = input.split_once(':').ok_or_else(invalid)?;
    Ok((parse_id(vid).ok_or_else(invalid)?, parse_id(pid).ok_or_else(invalid)?))
}

fn parse_id(part: &str) -> Option<u16> {
    if part.len() != 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let mut bytes = [0u8; 2];
    hex::decode_to_slice(part, &mut bytes).ok()?;
    Some(u16::from_be_bytes(bytes))
}

/// Render a VID:PID pair as lowercase `vvvv:pppp`.
pub fn format_vid_pid(vid: u16, pid: u16) -> String {
    format!("{vid:04x}:{pid:04x}")
}

/// Helper for creating test data from hex strings
///
/// Panics on invalid hex (intended for test code only).
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    decode_hex(hex).expect("Invalid hex in test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let data = vec![0x00, 0x04, 0x20, 0xA0, 0x42, 0xB1];
        let encoded = encode_hex(&data);
        assert_eq!(encoded, "000420a042b1");
        assert_eq!(decode_hex(&encoded).unwrap(), data);
        assert_eq!(decode_hex("000420A042B1").unwrap(), data);
    }

    #[test]
    fn test_decode_with_whitespace() {
        assert_eq!(decode_hex("06 02\n00 00").unwrap(), vec![0x06, 0x02, 0x00, 0x00]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode_hex("1"), Err(PhyError::InvalidHexString(_))));
        assert!(matches!(decode_hex("GG"), Err(PhyError::InvalidHexString(_))));
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_hex_compact(&[0x06, 0x02, 0x00, 0x0a]), "06 02 00 0a");
    }

    #[test]
    fn test_parse_vid_pid() {
        assert_eq!(parse_vid_pid("20a0:42b1").unwrap(), (0x20a0, 0x42b1));
        assert_eq!(parse_vid_pid("FEFF:FCFD").unwrap(), (0xfeff, 0xfcfd));
        assert_eq!(parse_vid_pid("234b:0000").unwrap(), (0x234b, 0x0000));
    }

    #[test]
    fn test_parse_vid_pid_rejects() {
        for bad in ["", "20a0", "20a0:42b", "20a0:42b10", "20a0-42b1", "+0a0:42b1", "20a0:42b1:", "g0a0:42b1", " 20a0:42b1"] {
            let err = parse_vid_pid(bad).unwrap_err();
            assert!(matches!(err, PhyError::InvalidVidPid(ref s) if s == bad), "{bad:?}");
        }
    }

    #[test]
    fn test_format_vid_pid() {
        assert_eq!(format_vid_pid(0x1050, 0x0407), "1050:0407");
        assert_eq!(format_vid_pid(0xFEFF, 0xFCFD), "feff:fcfd");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("0b010f"), vec![0x0B, 0x01, 0x0F]);
    }
}
