//! Checksum module - the 40-bit PolyMod checksum shared by encoder and decoder

mod polymod;

pub use polymod::*;
