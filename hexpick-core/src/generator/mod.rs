//! Hex color generation: encoding RGB triples and drawing random colors.

mod hex;
mod random;

pub use hex::rgb_to_hex;
pub use random::generate_random_hex;
