//! # Utility Modules
//!
//! Common helpers used by the CLI, the config layer and the tests.

pub mod hex;

pub use hex::{decode_hex, encode_hex, format_hex_compact, format_vid_pid, hex_to_bytes, parse_vid_pid};
