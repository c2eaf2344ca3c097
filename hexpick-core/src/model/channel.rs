//! RGB channel selector used by the slider panel.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// One of the three 8-bit channels of an [`Rgb`](super::Rgb) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in slider order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Upper-case label shown next to the slider.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    /// Bit offset of this channel inside a packed 24-bit color.
    pub fn shift(self) -> u32 {
        match self {
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }
}

impl FromStr for Channel {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            _ => Err(PickerError::InvalidChannel {
                input: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
