//! Classification of the text input buffer.

use crate::model::HexColor;
use crate::parser::{is_valid_hex, normalize_hex};

/// Outcome of checking the text field contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCheck {
    /// A complete hex color, already normalized.
    Valid(HexColor),
    /// Nothing but whitespace. Not an error, but nothing to commit either.
    Empty,
    /// Text that is not (yet) a hex color.
    Invalid,
}

impl InputCheck {
    /// Whether the field should show the format message.
    pub fn is_error(&self) -> bool {
        matches!(self, InputCheck::Invalid)
    }
}

/// Classify raw text. Validity is judged on the untrimmed text; only the
/// empty check ignores surrounding whitespace.
pub fn check_input(raw: &str) -> InputCheck {
    if is_valid_hex(raw) {
        InputCheck::Valid(HexColor::from_canonical(normalize_hex(raw)))
    } else if is_blank(raw) {
        InputCheck::Empty
    } else {
        InputCheck::Invalid
    }
}

/// Only whitespace, counting the byte order mark as whitespace too.
fn is_blank(raw: &str) -> bool {
    raw.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}
