//! Data model types for colors.

mod channel;
mod color;

pub use channel::Channel;
pub use color::{HexColor, Rgb};
