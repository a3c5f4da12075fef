//! Address module - encoding and decoding of `prefix:payload` addresses

mod decoder;
mod encoder;
mod error;
mod network;
mod version;

pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use network::*;
pub use version::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fields recovered from a decoded address
///
/// Deserializing checks the same invariants `decode` does: a valid prefix, a
/// supported version byte, a type that agrees with it and a hash of the
/// length its size class names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDecodedAddress")]
pub struct DecodedAddress {
    /// Lowercase prefix
    pub prefix: String,
    /// Raw version byte
    pub version: u8,
    /// Address type derived from the version byte
    #[serde(rename = "type")]
    pub kind: AddressType,
    /// Hash, exactly as long as the version byte's size class says
    #[serde(with = "hex_serde")]
    pub hash: Vec<u8>,
}

impl DecodedAddress {
    /// Type field of the version byte, as passed to [`encode`]
    pub fn version_type(&self) -> u8 {
        self.kind.type_bits()
    }

    /// Hash as lowercase hex
    pub fn hash_hex(&self) -> String {
        hex::encode(&self.hash)
    }

    /// Network preset matching the prefix, if any
    pub fn network(&self) -> Option<Network> {
        Network::from_prefix(&self.prefix)
    }

    /// Encode these fields back into an address.
    ///
    /// The fields are public, so they are checked against each other again
    /// before encoding.
    pub fn to_address(&self) -> Result<String, AddressError> {
        let version = check_fields(&self.prefix, self.version, self.kind, &self.hash)?;
        encode(&self.prefix, version.kind().type_bits(), &self.hash)
    }
}

/// Unchecked wire form of [`DecodedAddress`]
#[derive(Deserialize)]
struct RawDecodedAddress {
    prefix: String,
    version: u8,
    #[serde(rename = "type")]
    kind: AddressType,
    #[serde(with = "hex_serde")]
    hash: Vec<u8>,
}

impl TryFrom<RawDecodedAddress> for DecodedAddress {
    type Error = AddressError;

    fn try_from(raw: RawDecodedAddress) -> Result<Self, Self::Error> {
        check_fields(&raw.prefix, raw.version, raw.kind, &raw.hash)?;
        Ok(DecodedAddress {
            prefix: raw.prefix,
            version: raw.version,
            kind: raw.kind,
            hash: raw.hash,
        })
    }
}

/// Check that decoded fields agree with each other.
fn check_fields(
    prefix: &str,
    version: u8,
    kind: AddressType,
    hash: &[u8],
) -> Result<VersionByte, AddressError> {
    validate_prefix(prefix)?;
    let version_byte = VersionByte::from_byte(version)?;
    if version_byte.kind() != kind {
        return Err(AddressError::TypeMismatch { version, kind });
    }
    if hash.len() != version_byte.hash_len() {
        return Err(AddressError::HashLengthMismatch {
            expected: version_byte.hash_len(),
            actual: hash.len(),
        });
    }
    Ok(version_byte)
}

impl FromStr for DecodedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Check that a prefix is non-empty lowercase ASCII letters.
pub fn validate_prefix(prefix: &str) -> Result<(), AddressError> {
    if prefix.is_empty() {
        return Err(AddressError::EmptyPrefix);
    }
    match prefix.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(c) => Err(AddressError::InvalidPrefixCharacter(c)),
        None => Ok(()),
    }
}

mod hex_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: String = Deserialize::deserialize(deserializer)?;
        hex::decode(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prefix() {
        assert_eq!(validate_prefix("bitcoincash"), Ok(()));
        assert_eq!(validate_prefix(""), Err(AddressError::EmptyPrefix));
        assert_eq!(validate_prefix("bch2"), Err(AddressError::InvalidPrefixCharacter('2')));
        assert_eq!(validate_prefix("Bch"), Err(AddressError::InvalidPrefixCharacter('B')));
    }

    #[test]
    fn test_decoded_address_helpers() {
        let decoded: DecodedAddress = "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t"
            .parse()
            .unwrap();

        assert_eq!(decoded.version_type(), 1);
        assert_eq!(decoded.hash_hex(), "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9");
        assert_eq!(decoded.network(), Some(Network::Testnet));
        assert_eq!(
            decoded.to_address().unwrap(),
            "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t"
        );
    }

    #[test]
    fn test_json_shape() {
        let decoded = decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
        let json = serde_json::to_value(&decoded).unwrap();

        assert_eq!(json["prefix"], "bitcoincash");
        assert_eq!(json["version"], 0);
        assert_eq!(json["type"], "P2PKH");
        assert_eq!(json["hash"], "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9");

        let back: DecodedAddress = serde_json::from_value(json).unwrap();
        assert_eq!(back, decoded);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_fields() {
        let cases = [
            // version 8 is P2SH with a 20-byte hash
            r#"{"prefix":"bitcoincash","version":8,"type":"P2PKH","hash":"00"}"#,
            r#"{"prefix":"bitcoincash","version":0,"type":"P2PKH","hash":"00"}"#,
            r#"{"prefix":"bitcoincash","version":128,"type":"P2PKH","hash":"0000000000000000000000000000000000000000"}"#,
            r#"{"prefix":"BitcoinCash","version":0,"type":"P2PKH","hash":"0000000000000000000000000000000000000000"}"#,
        ];
        for json in cases {
            let result: Result<DecodedAddress, _> = serde_json::from_str(json);
            assert!(result.is_err(), "accepted {}", json);
        }

        let json = r#"{"prefix":"bitcoincash","version":8,"type":"P2PKH","hash":"0000000000000000000000000000000000000000"}"#;
        let err = serde_json::from_str::<DecodedAddress>(json).unwrap_err();
        assert!(err.to_string().contains("does not match version byte 0x08"), "{}", err);
    }

    #[test]
    fn test_to_address_checks_fields() {
        let mut decoded = decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
        decoded.version = 0x08;
        assert_eq!(
            decoded.to_address(),
            Err(AddressError::TypeMismatch { version: 0x08, kind: AddressType::P2PKH })
        );

        decoded.version = 0x01;
        assert_eq!(
            decoded.to_address(),
            Err(AddressError::HashLengthMismatch { expected: 24, actual: 20 })
        );
    }
}
