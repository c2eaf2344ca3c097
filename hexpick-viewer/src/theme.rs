//! Sizes, fonts and color conversion for the picker window.
//!
//! The window has no fixed palette: background and foreground come from the
//! picked color every frame.

use egui::Color32;
use hexpick_core::{Glow, HexColor};

// =============================================================================
// TYPOGRAPHY
// =============================================================================
pub const HEX_FONT_SIZE: f32 = 72.0;
pub const ERROR_FONT_SIZE: f32 = 14.0;
pub const BUTTON_FONT_SIZE: f32 = 16.0;
pub const LABEL_FONT_SIZE: f32 = 16.0;
pub const VALUE_FONT_SIZE: f32 = 14.0;

// =============================================================================
// LAYOUT
// =============================================================================
pub const HEX_FIELD_WIDTH: f32 = 420.0;
pub const BUTTON_SIZE: [f32; 2] = [120.0, 44.0];
pub const BUTTON_ROUNDING: f32 = 8.0;
pub const BUTTON_STROKE_WIDTH: f32 = 2.0;
pub const PANEL_WIDTH: f32 = 360.0;
pub const TRACK_HEIGHT: f32 = 8.0;
pub const THUMB_RADIUS: f32 = 10.0;
pub const GLOW_BLUR: f32 = 40.0;

// =============================================================================
// OPACITY
// =============================================================================
pub const ERROR_OPACITY: f32 = 0.8;
pub const VALUE_OPACITY: f32 = 0.7;

/// Opaque egui color for a picked color.
pub fn color32(color: &HexColor) -> Color32 {
    let rgb = color.to_rgb();
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Translucent egui color for the headline glow.
pub fn glow32(glow: &Glow) -> Color32 {
    let alpha = (glow.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(glow.rgb.r, glow.rgb.g, glow.rgb.b, alpha)
}
