//! Clipboard seam.
//!
//! The core never talks to the OS clipboard directly; front ends pass in an
//! implementation of [`Clipboard`].

use crate::error::ClipboardError;

/// A sink for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard that records every write. Useful for headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently written text.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Every write, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
