//! Hex string validation, normalization and decoding.
//!
//! Accepted input is an optional single `#` followed by exactly six ASCII hex
//! digits in either case. Nothing is trimmed: `" #ffffff"` is rejected.

use std::str::FromStr;

use crate::error::{PickerError, Result};
use crate::model::{HexColor, Rgb};

/// Number of hex digits in a color.
const DIGITS: usize = 6;

/// Check whether `s` is a six-digit hex color, with or without a leading `#`.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    digits.len() == DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip a leading `#`, lowercase the digits and re-prefix with `#`.
///
/// Only meaningful for strings accepted by [`is_valid_hex`]. Idempotent.
pub fn normalize_hex(s: &str) -> String {
    let digits = s.strip_prefix('#').unwrap_or(s);
    format!("#{}", digits.to_ascii_lowercase())
}

/// Decode a canonical hex color into its RGB triple.
pub fn hex_to_rgb(hex: &HexColor) -> Rgb {
    let value = hex.as_str()[1..]
        .bytes()
        .fold(0u32, |acc, b| (acc << 4) | digit_value(b));
    Rgb::from_u24(value)
}

fn digit_value(b: u8) -> u32 {
    // Canonical strings only hold [0-9a-f].
    (b as char).to_digit(16).unwrap_or(0)
}

impl HexColor {
    /// Validate and normalize user text into a color.
    pub fn parse(s: &str) -> Result<Self> {
        if !is_valid_hex(s) {
            return Err(PickerError::InvalidHex {
                input: s.to_string(),
            });
        }
        Ok(HexColor::from_canonical(normalize_hex(s)))
    }
}

impl FromStr for HexColor {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        HexColor::parse(s)
    }
}
