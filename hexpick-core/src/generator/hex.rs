//! RGB to hex encoding.

use crate::model::HexColor;

/// Encode three channels as `#rrggbb`, each as a zero-padded lowercase byte.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_canonical(format!("#{:02x}{:02x}{:02x}", r, g, b))
}
