//! Bit regrouping between 8-bit bytes and 5-bit groups
//!
//! The input is treated as one big-endian bit stream and re-chunked into
//! groups of a different width.

use thiserror::Error;

/// Regrouping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegroupError {
    #[error("Invalid group widths: {from} -> {to}")]
    InvalidWidth { from: u32, to: u32 },
    #[error("Value {value} does not fit in {width} bits")]
    ValueOutOfRange { value: u8, width: u32 },
    #[error("{0} leftover bits exceed one input group")]
    ExcessPadding(u32),
    #[error("Non-zero padding bits")]
    NonZeroPadding,
}

/// Regroup `data` from `from`-bit values into `to`-bit values.
///
/// With `pad`, trailing bits that do not fill a whole group are zero-padded
/// on the right and emitted as a final group. Without it, the trailing bits
/// must be fewer than `from` and all zero, so only the canonical encoding of
/// a byte string is accepted.
///
/// Both widths must be in `1..=8`.
pub fn regroup(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, RegroupError> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(RegroupError::InvalidWidth { from, to });
    }

    let max_out: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity((data.len() * from as usize).div_ceil(to as usize));

    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(RegroupError::ValueOutOfRange { value, width: from });
        }
        acc = ((acc << from) | u32::from(value)) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_out) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_out) as u8);
        }
    } else if bits >= from {
        return Err(RegroupError::ExcessPadding(bits));
    } else if (acc << (to - bits)) & max_out != 0 {
        return Err(RegroupError::NonZeroPadding);
    }

    Ok(out)
}
