//! CashAddr Codec Library
//!
//! Encodes a version byte plus a hash into a checksummed, human-readable
//! `prefix:payload` address and decodes it back, rejecting anything corrupted
//! or non-canonical.
//!
//! The library never logs or prints; the `cashaddr` binary is the only caller
//! that renders anything.

pub mod address;
pub mod checksum;
pub mod config;
pub mod encoding;

pub use address::{decode, decode_with, encode, AddressError, AddressType, DecodedAddress, Network};
pub use config::DecodeOptions;

/// Format constants - fixed by the address format, never configurable
pub mod constants {
    /// Separator between prefix and payload
    pub const SEPARATOR: char = ':';

    /// Base32 alphabet, indexed by 5-bit value
    pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

    /// Number of 5-bit groups in the checksum (40 bits)
    pub const CHECKSUM_LEN: usize = 8;

    /// Smallest payload: one data group plus the checksum
    pub const MIN_PAYLOAD_LEN: usize = CHECKSUM_LEN + 1;

    /// Hash byte lengths, indexed by the version byte's size class
    pub const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

    /// PolyMod generator constants, one per bit of the shifted-out group
    pub const GENERATORS: [u64; 5] = [
        0x98f2bc8e61,
        0x79b76d99e2,
        0xf33e5fb3c4,
        0xae2eabe2a8,
        0x1e4f43e470,
    ];
}
