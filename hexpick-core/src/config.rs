//! Configuration constants and settings for the picker.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::model::HexColor;

/// Largest 24-bit color value (`#ffffff`).
pub const MAX_COLOR: u32 = 0xFF_FFFF;

/// Luminance above which a background counts as light (black foreground).
pub const LUMINANCE_THRESHOLD: f64 = 128.0;

/// Default time the "Copied!" indicator stays on, in milliseconds.
pub const COPIED_RESET_MS: u64 = 2000;

/// Message shown while the text field holds a non-empty invalid value.
pub const HEX_FORMAT_MESSAGE: &str =
    "Hex codes use # followed by exactly 6 characters (0-9, A-F). For example: #FF5733";

/// Startup settings for a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Start color. A random color is drawn when unset.
    pub initial_color: Option<HexColor>,
    /// Open with the RGB slider panel visible.
    pub show_sliders: bool,
    /// How long the copy indicator stays on.
    pub copied_reset_ms: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: None,
            show_sliders: false,
            copied_reset_ms: COPIED_RESET_MS,
        }
    }
}

impl PickerConfig {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: PickerConfig =
            serde_json::from_str(&text).map_err(|e| PickerError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Copy indicator duration.
    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }
}
