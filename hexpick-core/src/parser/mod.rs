//! Hex color parsing and normalization.

mod hex;

pub use hex::{hex_to_rgb, is_valid_hex, normalize_hex};
