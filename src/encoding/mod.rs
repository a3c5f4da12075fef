//! Encoding module - bit regrouping and the base32 alphabet

mod bits;
pub mod base32;

pub use bits::*;
