//! Address decoder
//!
//! Decoding runs a fixed sequence of validation gates. The first gate that
//! fails ends the decode with its own error; nothing partial is returned.

use super::{validate_prefix, AddressError, DecodedAddress, VersionByte};
use crate::checksum::verify_checksum;
use crate::config::DecodeOptions;
use crate::constants::{CHECKSUM_LEN, MIN_PAYLOAD_LEN, SEPARATOR};
use crate::encoding::{base32, regroup};

/// Decode an address that carries its own prefix.
///
/// An address without a `:` separator fails with
/// [`AddressError::MissingSeparator`]. Use [`decode_with`] to assume a prefix.
pub fn decode(address: &str) -> Result<DecodedAddress, AddressError> {
    decode_with(address, &DecodeOptions::default())
}

/// Decode an address, applying `options` to a missing prefix.
pub fn decode_with(address: &str, options: &DecodeOptions) -> Result<DecodedAddress, AddressError> {
    let (prefix, payload) = split_address(address, options)?;

    // Uniform case applies to the payload only; the prefix must already be lowercase.
    let has_lower = payload.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = payload.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }

    validate_prefix(prefix)?;

    let groups = base32::decode_groups(&payload.to_ascii_lowercase())
        .map_err(|err| AddressError::InvalidAlphabetCharacter(err.0))?;

    if groups.len() < MIN_PAYLOAD_LEN {
        return Err(AddressError::PayloadTooShort(groups.len()));
    }

    if !verify_checksum(prefix, &groups) {
        return Err(AddressError::ChecksumMismatch);
    }

    let data = &groups[..groups.len() - CHECKSUM_LEN];
    let bytes = regroup(data, 5, 8, false)?;

    let (&version, hash) = bytes
        .split_first()
        .ok_or(AddressError::PayloadTooShort(groups.len()))?;
    let version = VersionByte::from_byte(version)?;

    if hash.len() != version.hash_len() {
        return Err(AddressError::HashLengthMismatch {
            expected: version.hash_len(),
            actual: hash.len(),
        });
    }

    Ok(DecodedAddress {
        prefix: prefix.to_string(),
        version: version.as_u8(),
        kind: version.kind(),
        hash: hash.to_vec(),
    })
}

/// Split at the separator, or fall back to the configured default prefix.
fn split_address<'a>(
    address: &'a str,
    options: &'a DecodeOptions,
) -> Result<(&'a str, &'a str), AddressError> {
    match address.split_once(SEPARATOR) {
        Some(parts) => Ok(parts),
        None => options
            .default_prefix
            .as_deref()
            .map(|prefix| (prefix, address))
            .ok_or(AddressError::MissingSeparator),
    }
}
