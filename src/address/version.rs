//! Version byte: address type and hash size class
//!
//! Layout: bit 7 reserved (zero), bits 3..=6 type, bits 0..=2 size class.

use super::AddressError;
use crate::constants::HASH_SIZES;
use serde::{Deserialize, Serialize};
use std::fmt;

const RESERVED_BIT: u8 = 0x80;
const SIZE_CLASS_MASK: u8 = 0x07;
const TYPE_SHIFT: u8 = 3;

/// Semantic kind of the hash carried by an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// Pay-to-public-key-hash
    #[serde(rename = "P2PKH")]
    P2PKH,
    /// Pay-to-script-hash
    #[serde(rename = "P2SH")]
    P2SH,
    /// Pay-to-public-key-hash, token-aware
    #[serde(rename = "TOKEN_P2PKH")]
    TokenP2PKH,
    /// Pay-to-script-hash, token-aware
    #[serde(rename = "TOKEN_P2SH")]
    TokenP2SH,
}

impl AddressType {
    /// Type field value stored in the version byte
    pub const fn type_bits(self) -> u8 {
        match self {
            AddressType::P2PKH => 0,
            AddressType::P2SH => 1,
            AddressType::TokenP2PKH => 2,
            AddressType::TokenP2SH => 3,
        }
    }

    /// Label used when printing decoded fields
    pub const fn label(self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::TokenP2PKH => "TOKEN_P2PKH",
            AddressType::TokenP2SH => "TOKEN_P2SH",
        }
    }
}

impl TryFrom<u8> for AddressType {
    type Error = AddressError;

    fn try_from(type_bits: u8) -> Result<Self, Self::Error> {
        match type_bits {
            0 => Ok(AddressType::P2PKH),
            1 => Ok(AddressType::P2SH),
            2 => Ok(AddressType::TokenP2PKH),
            3 => Ok(AddressType::TokenP2SH),
            other => Err(AddressError::UnsupportedVersionType(other)),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size class index for a hash length, if the length is supported
pub fn size_class(hash_len: usize) -> Option<u8> {
    HASH_SIZES
        .iter()
        .position(|&len| len == hash_len)
        .map(|class| class as u8)
}

/// A validated version byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionByte {
    byte: u8,
    kind: AddressType,
}

impl VersionByte {
    /// Build the version byte for a type and hash length
    pub fn new(kind: AddressType, hash_len: usize) -> Result<Self, AddressError> {
        let class = size_class(hash_len).ok_or(AddressError::UnsupportedHashLength(hash_len))?;
        Ok(VersionByte {
            byte: (kind.type_bits() << TYPE_SHIFT) | class,
            kind,
        })
    }

    /// Parse a decoded version byte
    pub fn from_byte(byte: u8) -> Result<Self, AddressError> {
        if byte & RESERVED_BIT != 0 {
            return Err(AddressError::UnsupportedVersionType(byte));
        }
        let kind = AddressType::try_from(byte >> TYPE_SHIFT)
            .map_err(|_| AddressError::UnsupportedVersionType(byte))?;
        Ok(VersionByte { byte, kind })
    }

    /// Raw byte value
    pub const fn as_u8(self) -> u8 {
        self.byte
    }

    /// Address type held in bits 3..=6
    pub const fn kind(self) -> AddressType {
        self.kind
    }

    /// Size class index (bits 0..=2)
    pub const fn size_class(self) -> u8 {
        self.byte & SIZE_CLASS_MASK
    }

    /// Hash length implied by the size class
    pub const fn hash_len(self) -> usize {
        HASH_SIZES[self.size_class() as usize]
    }
}
