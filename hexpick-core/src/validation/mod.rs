//! Validation of raw text typed into the hex field.

mod validate;

pub use validate::{check_input, InputCheck};
