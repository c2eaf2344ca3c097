//! hexpick-core - Core library for the hexpick color picker.
//!
//! This library holds everything the picker does that is not drawing: hex and
//! RGB conversion, input validation, luminance-based contrast selection,
//! random color generation, and the UI state with its transition rules.
//!
//! # Example
//!
//! ```
//! use hexpick_core::{ColorPicker, HexColor, Intent, MemoryClipboard, PickerConfig};
//! use std::time::{Duration, Instant};
//!
//! let config = PickerConfig {
//!     initial_color: Some(HexColor::parse("#123456").unwrap()),
//!     ..Default::default()
//! };
//! let mut picker = ColorPicker::new(&config);
//!
//! picker.dispatch(Intent::TextInput("#ABCDEF".to_string()));
//! assert_eq!(picker.state().color().as_str(), "#abcdef");
//! assert_eq!(picker.appearance().foreground.as_str(), "#000000");
//!
//! let mut clipboard = MemoryClipboard::new();
//! let now = Instant::now();
//! picker.copy(&mut clipboard, now).unwrap();
//! assert!(picker.state().copied());
//!
//! picker.tick(now + Duration::from_millis(2000));
//! assert!(!picker.state().copied());
//! ```

pub mod clipboard;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod state;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use clipboard::{Clipboard, MemoryClipboard};
pub use config::{PickerConfig, HEX_FORMAT_MESSAGE, LUMINANCE_THRESHOLD, MAX_COLOR};
pub use error::{ClipboardError, ErrorCode, PickerError, Result};
pub use generator::{generate_random_hex, rgb_to_hex};
pub use model::{Channel, HexColor, Rgb};
pub use parser::{hex_to_rgb, is_valid_hex, normalize_hex};
pub use state::{ColorPicker, Intent, ResetTimer, TimerToken, UiState};
pub use transform::{
    channel_track, channel_tracks, contrast_color, is_light, luminance, Appearance, ChannelTrack,
    Glow,
};
pub use validation::{check_input, InputCheck};

/// Describe a color for display: the normalized hex plus everything derived
/// from it.
///
/// This is the headless entry point used by the command-line tool.
pub fn describe(input: &str) -> Result<ColorReport> {
    let color = HexColor::parse(input)?;
    Ok(ColorReport::of(&color))
}

/// Summary of one color.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ColorReport {
    pub hex: HexColor,
    pub rgb: Rgb,
    pub luminance: f64,
    pub is_light: bool,
    pub contrast: HexColor,
}

impl ColorReport {
    pub fn of(color: &HexColor) -> Self {
        let rgb = color.to_rgb();
        Self {
            hex: color.clone(),
            rgb,
            luminance: luminance(rgb),
            is_light: is_light(color),
            contrast: contrast_color(color),
        }
    }
}
