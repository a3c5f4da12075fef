//! PolyMod checksum
//!
//! A degree-40 linear recurrence over 5-bit symbols. The prefix takes part in
//! the checksum, so an address pasted under the wrong prefix fails to verify.
//!
//! This module does arithmetic only. Prefix and payload validation belong to
//! the encoder and decoder.

use crate::constants::{CHECKSUM_LEN, GENERATORS};
use std::iter;

/// Mask for the low 35 bits of the accumulator (the bits that survive a shift)
const SHIFT_MASK: u64 = 0x07_ffff_ffff;

/// Run the PolyMod recurrence over a sequence of 5-bit values.
///
/// Returns the raw accumulator. It starts at 1, so a sequence that ends in
/// its own valid checksum leaves the accumulator at exactly 1.
pub fn polymod<I>(values: I) -> u64
where
    I: IntoIterator<Item = u8>,
{
    let mut c: u64 = 1;
    for d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & SHIFT_MASK) << 5) ^ u64::from(d);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c
}

/// Expand a prefix into checksum input: the low 5 bits of each lower-cased
/// byte, then a zero separator.
pub fn expand_prefix(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix
        .bytes()
        .map(|b| b.to_ascii_lowercase() & 0x1f)
        .chain(iter::once(0))
}

/// Compute the 40-bit checksum of `payload` (5-bit groups) under `prefix`.
pub fn compute_checksum(prefix: &str, payload: &[u8]) -> u64 {
    let values = expand_prefix(prefix)
        .chain(payload.iter().copied())
        .chain(iter::repeat(0).take(CHECKSUM_LEN));
    polymod(values) ^ 1
}

/// Split a 40-bit checksum into 5-bit groups, most significant first.
pub fn checksum_groups(checksum: u64) -> [u8; CHECKSUM_LEN] {
    let mut groups = [0u8; CHECKSUM_LEN];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = ((checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
    }
    groups
}

/// Checksum groups to append to `payload`
pub fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    checksum_groups(compute_checksum(prefix, payload))
}

/// Verify groups whose last `CHECKSUM_LEN` entries are the checksum itself.
pub fn verify_checksum(prefix: &str, payload_with_checksum: &[u8]) -> bool {
    let values = expand_prefix(prefix).chain(payload_with_checksum.iter().copied());
    polymod(values) ^ 1 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_keeps_seed() {
        assert_eq!(polymod(iter::empty()), 1);
    }

    #[test]
    fn test_expand_prefix() {
        let expanded: Vec<u8> = expand_prefix("bitcoincash").collect();
        assert_eq!(expanded, vec![2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8, 0]);
    }

    #[test]
    fn test_expand_prefix_ignores_case() {
        let lower: Vec<u8> = expand_prefix("bchtest").collect();
        let upper: Vec<u8> = expand_prefix("BCHTEST").collect();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_checksum_groups_order() {
        let groups = checksum_groups(0x01_0000_001f);
        assert_eq!(groups, [0, 4, 0, 0, 0, 0, 0, 31]);
    }

    #[test]
    fn test_created_checksum_verifies() {
        let payload = vec![0u8; 34];
        let mut data = payload.clone();
        data.extend_from_slice(&create_checksum("bitcoincash", &payload));

        assert!(verify_checksum("bitcoincash", &data));
        assert!(verify_checksum("BITCOINCASH", &data));
    }

    #[test]
    fn test_checksum_bound_to_prefix() {
        let payload = vec![0u8; 34];
        let mut data = payload.clone();
        data.extend_from_slice(&create_checksum("bitcoincash", &payload));

        assert!(!verify_checksum("bchtest", &data));
    }

    #[test]
    fn test_single_group_change_detected() {
        let payload: Vec<u8> = (0..34).map(|i| (i * 7 % 32) as u8).collect();
        let mut data = payload.clone();
        data.extend_from_slice(&create_checksum("bchtest", &payload));

        for i in 0..data.len() {
            let mut corrupted = data.clone();
            corrupted[i] ^= 0x01;
            assert!(!verify_checksum("bchtest", &corrupted), "undetected at {}", i);
        }
    }
}
