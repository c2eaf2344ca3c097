//! Luminance-based foreground selection.
//!
//! The luminance here is a plain weighted sum of the 8-bit channels with no
//! gamma expansion. It is a brightness proxy, not WCAG relative luminance,
//! and the threshold is fixed at [`LUMINANCE_THRESHOLD`].

use serde::Serialize;

use crate::config::LUMINANCE_THRESHOLD;
use crate::model::{HexColor, Rgb};

/// Weighted channel sum `0.2126 r + 0.7152 g + 0.0722 b`, in [0, 255].
pub fn luminance(rgb: Rgb) -> f64 {
    0.2126 * f64::from(rgb.r) + 0.7152 * f64::from(rgb.g) + 0.0722 * f64::from(rgb.b)
}

/// Whether `color` reads as a light background.
pub fn is_light(color: &HexColor) -> bool {
    luminance(color.to_rgb()) > LUMINANCE_THRESHOLD
}

/// Black on light backgrounds, white on dark ones.
pub fn contrast_color(color: &HexColor) -> HexColor {
    if is_light(color) {
        Rgb::BLACK.to_hex()
    } else {
        Rgb::WHITE.to_hex()
    }
}

/// Soft halo drawn behind the headline text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Glow {
    pub rgb: Rgb,
    /// Opacity in [0, 1].
    pub alpha: f32,
}

/// Everything the renderer needs to paint a color, derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appearance {
    pub background: HexColor,
    pub foreground: HexColor,
    pub is_light: bool,
    pub glow: Glow,
}

impl Appearance {
    /// Derive the appearance of a committed color.
    pub fn of(color: &HexColor) -> Self {
        let light = is_light(color);
        let glow = if light {
            Glow {
                rgb: Rgb::BLACK,
                alpha: 0.1,
            }
        } else {
            Glow {
                rgb: Rgb::WHITE,
                alpha: 0.2,
            }
        };
        Self {
            background: color.clone(),
            foreground: contrast_color(color),
            is_light: light,
            glow,
        }
    }
}
