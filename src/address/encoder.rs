//! Address encoder

use super::{validate_prefix, AddressError, AddressType, VersionByte};
use crate::checksum::create_checksum;
use crate::constants::SEPARATOR;
use crate::encoding::{base32, regroup};

/// Encode a hash into an address.
///
/// `version_type` is the type field of the version byte (0 = P2PKH,
/// 1 = P2SH, 2 and 3 their token-aware forms). The size class is taken from
/// `hash.len()`, which must be one of the supported hash sizes.
///
/// The prefix must already be lowercase; it is not normalized.
pub fn encode(prefix: &str, version_type: u8, hash: &[u8]) -> Result<String, AddressError> {
    validate_prefix(prefix)?;
    let kind = AddressType::try_from(version_type)?;
    let version = VersionByte::new(kind, hash.len())?;

    let mut payload = Vec::with_capacity(hash.len() + 1);
    payload.push(version.as_u8());
    payload.extend_from_slice(hash);

    let mut groups = regroup(&payload, 8, 5, true)?;
    let checksum = create_checksum(prefix, &groups);
    groups.extend_from_slice(&checksum);

    let mut address = String::with_capacity(prefix.len() + 1 + groups.len());
    address.push_str(prefix);
    address.push(SEPARATOR);
    address.push_str(&base32::encode_groups(&groups));

    Ok(address)
}
