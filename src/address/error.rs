//! Address errors

use super::AddressType;
use crate::encoding::RegroupError;
use thiserror::Error;

/// Errors from encoding or decoding an address.
///
/// Every failure cause has its own variant; nothing is recovered silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Empty prefix")]
    EmptyPrefix,
    #[error("Invalid prefix character {0:?}")]
    InvalidPrefixCharacter(char),
    #[error("Missing ':' separator")]
    MissingSeparator,
    #[error("Mixed case address")]
    MixedCase,
    #[error("Invalid payload character {0:?}")]
    InvalidAlphabetCharacter(char),
    #[error("Payload too short: {0} characters")]
    PayloadTooShort(usize),
    #[error("Invalid checksum")]
    ChecksumMismatch,
    #[error("Non-zero padding bits")]
    NonZeroPadding,
    #[error("Excess padding: {0} leftover bits")]
    ExcessPadding(u32),
    #[error("Hash length mismatch: version expects {expected} bytes, got {actual}")]
    HashLengthMismatch { expected: usize, actual: usize },
    #[error("Unsupported hash length: {0} bytes")]
    UnsupportedHashLength(usize),
    #[error("Unsupported version type: {0:#04x}")]
    UnsupportedVersionType(u8),
    #[error("Type {kind} does not match version byte {version:#04x}")]
    TypeMismatch { version: u8, kind: AddressType },
    #[error("Bit regrouping failed: {0}")]
    Regroup(RegroupError),
}

impl From<RegroupError> for AddressError {
    fn from(err: RegroupError) -> Self {
        match err {
            RegroupError::NonZeroPadding => AddressError::NonZeroPadding,
            RegroupError::ExcessPadding(bits) => AddressError::ExcessPadding(bits),
            other => AddressError::Regroup(other),
        }
    }
}
