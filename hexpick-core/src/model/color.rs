//! Color value types: the RGB triple and the canonical hex string.

use serde::{Deserialize, Serialize};

use super::Channel;
use crate::config::MAX_COLOR;
use crate::error::PickerError;

/// An sRGB color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new triple.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a 24-bit big-endian value. Bits above 24 are ignored.
    pub fn from_u24(value: u32) -> Self {
        let byte = |channel: Channel| ((value >> channel.shift()) & 0xff) as u8;
        Self {
            r: byte(Channel::Red),
            g: byte(Channel::Green),
            b: byte(Channel::Blue),
        }
    }

    /// Pack into a 24-bit big-endian value.
    pub fn to_u24(self) -> u32 {
        Channel::ALL.iter().fold(0, |acc, &channel| {
            acc | (u32::from(self.channel(channel)) << channel.shift())
        })
    }

    /// Read a single channel.
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy of this color with one channel replaced.
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    /// Encode as canonical hex.
    pub fn to_hex(self) -> HexColor {
        crate::generator::rgb_to_hex(self.r, self.g, self.b)
    }
}

/// A color in canonical hex form: `#` followed by six lowercase hex digits.
///
/// The only ways to obtain one are the validating parser
/// ([`HexColor::parse`] / `FromStr`) and the encoders, so every value held
/// by the picker is already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Wrap a string the caller has already normalized.
    pub(crate) fn from_canonical(s: String) -> Self {
        debug_assert!(
            s.len() == 7
                && s.starts_with('#')
                && s[1..]
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)),
            "not a canonical hex color: {s}"
        );
        Self(s)
    }

    /// Format a 24-bit value. Bits above 24 are ignored.
    pub fn from_u24(value: u32) -> Self {
        Self(format!("#{:06x}", value & MAX_COLOR))
    }

    /// The canonical `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into an RGB triple.
    pub fn to_rgb(&self) -> Rgb {
        crate::parser::hex_to_rgb(self)
    }

    /// The packed 24-bit value.
    pub fn to_u24(&self) -> u32 {
        self.to_rgb().to_u24()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl TryFrom<String> for HexColor {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HexColor::parse(&s)
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u24_zero_pads() {
        assert_eq!(HexColor::from_u24(0), "#000000");
        assert_eq!(HexColor::from_u24(0xff), "#0000ff");
        assert_eq!(HexColor::from_u24(MAX_COLOR), "#ffffff");
    }

    #[test]
    fn test_from_u24_masks_high_bits() {
        assert_eq!(HexColor::from_u24(0x0112_3456), "#123456");
        assert_eq!(Rgb::from_u24(0xff12_3456), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_u24_packing_is_big_endian() {
        let rgb = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(rgb.to_u24(), 0x12_3456);
        assert_eq!(Rgb::from_u24(0x12_3456), rgb);
        assert_eq!(Rgb::from_u24(0xff_0000), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_with_channel_only_touches_one_channel() {
        let rgb = Rgb::new(10, 20, 30).with_channel(Channel::Green, 200);
        assert_eq!(rgb, Rgb::new(10, 200, 30));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let color = HexColor::from_u24(0xabcdef);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#abcdef\"");

        let back: HexColor = serde_json::from_str("\"ABCDEF\"").unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<HexColor>("\"#abc\"").is_err());
    }
}
