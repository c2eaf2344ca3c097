//! Uniform random color generation.

use rand::Rng;

use crate::config::MAX_COLOR;
use crate::model::HexColor;

/// Draw a color uniformly from all 2^24 values.
pub fn generate_random_hex<R: Rng>(rng: &mut R) -> HexColor {
    let value = rng.random_range(0..=MAX_COLOR);
    tracing::trace!("Drew random color {:06x}", value);
    HexColor::from_u24(value)
}
