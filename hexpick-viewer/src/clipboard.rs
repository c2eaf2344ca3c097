//! System clipboard backed by arboard.

use hexpick_core::{Clipboard, ClipboardError};

/// Lazily opened OS clipboard.
///
/// The handle is kept for the life of the window: on X11 and Wayland the
/// copied text is only served while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let result = clipboard.set_text(text.to_string());
        self.inner = Some(clipboard);
        result.map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
