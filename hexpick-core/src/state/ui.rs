//! The UI state record and its transition rules.

use crate::config::HEX_FORMAT_MESSAGE;
use crate::model::{Channel, HexColor};
use crate::transform::Appearance;
use crate::validation::{check_input, InputCheck};

/// Everything the renderer shows, and nothing derived.
///
/// Transitions never fail: invalid text is recorded as an `error` message
/// instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    color: HexColor,
    input_value: String,
    error: Option<String>,
    copied: bool,
    show_sliders: bool,
}

impl UiState {
    /// Fresh state showing `color`, with the field in sync and sliders hidden.
    pub fn new(color: HexColor) -> Self {
        Self {
            input_value: color.as_str().to_string(),
            color,
            error: None,
            copied: false,
            show_sliders: false,
        }
    }

    /// Committed color.
    pub fn color(&self) -> &HexColor {
        &self.color
    }

    /// Text field contents, possibly invalid.
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Message to show under the text field.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the copy indicator is on.
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Whether the RGB slider panel is open.
    pub fn show_sliders(&self) -> bool {
        self.show_sliders
    }

    /// Derived presentation values for the committed color.
    pub fn appearance(&self) -> Appearance {
        Appearance::of(&self.color)
    }

    /// Label of the slider panel toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.show_sliders {
            "Hide"
        } else {
            "Edit"
        }
    }

    /// Label of the copy button.
    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }

    /// The user edited the text field.
    pub fn text_input(&mut self, raw: &str) {
        self.input_value = raw.to_string();
        self.error = None;

        match check_input(raw) {
            InputCheck::Valid(color) => {
                tracing::debug!("Committed typed color {}", color);
                self.input_value = color.as_str().to_string();
                self.color = color;
                self.copied = false;
            }
            InputCheck::Invalid => {
                self.error = Some(HEX_FORMAT_MESSAGE.to_string());
            }
            InputCheck::Empty => {}
        }
    }

    /// The user dragged one channel slider.
    pub fn slider_change(&mut self, channel: Channel, value: u8) {
        let rgb = self.color.to_rgb().with_channel(channel, value);
        tracing::debug!("Slider {} = {}", channel, value);
        self.commit(rgb.to_hex());
    }

    /// Replace the color wholesale (shuffle).
    pub fn set_color(&mut self, color: HexColor) {
        self.commit(color);
    }

    /// Open or close the slider panel.
    pub fn toggle_sliders(&mut self) {
        self.show_sliders = !self.show_sliders;
    }

    /// Turn the copy indicator on after a successful clipboard write.
    ///
    /// Drops a previous clipboard error but keeps the format message while
    /// the field still holds invalid text.
    pub fn mark_copied(&mut self) {
        self.copied = true;
        self.error = check_input(&self.input_value)
            .is_error()
            .then(|| HEX_FORMAT_MESSAGE.to_string());
    }

    /// Turn the copy indicator off.
    pub fn clear_copied(&mut self) {
        self.copied = false;
    }

    /// Record a failed clipboard write as a transient error.
    pub fn copy_failed(&mut self, reason: &str) {
        self.copied = false;
        self.error = Some(format!(
            "Could not copy {} to the clipboard: {}",
            self.color, reason
        ));
    }

    pub(crate) fn set_show_sliders(&mut self, show: bool) {
        self.show_sliders = show;
    }

    fn commit(&mut self, color: HexColor) {
        self.input_value = color.as_str().to_string();
        self.color = color;
        self.error = None;
        self.copied = false;
    }
}
