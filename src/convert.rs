// Fixed-Width Bech32 Library
// Written by
//   The fixed-bech32 developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Bit regrouping
//!
//! Lossless conversion between 5-bit field elements and bytes. The input is
//! read as one big-endian bitstream and re-sliced into groups of the output
//! width.
//!
//! From BIP-173:
//! > Re-arrange those bits into groups of 8 bits. Any incomplete group at the
//! > end MUST be 4 bits or less, MUST be all zeroes, and is discarded.

use std::fmt;

use bech32::primitives::iter::{ByteIterExt, Fe32IterExt};
use bech32::Fe32;

/// Number of bytes produced from `n` field elements (trailing bits dropped).
#[inline]
pub const fn byte_len(n: usize) -> usize { n * 5 / 8 }

/// Number of field elements needed to hold `n` bytes (last group zero-padded).
#[inline]
pub const fn base32_len(n: usize) -> usize { (n * 8 + 4) / 5 }

/// Validates the padding bits left over when regrouping `fes` into bytes.
fn validate_padding(fes: &[Fe32]) -> Result<(), PaddingError> {
    let last = match fes.last() {
        Some(fe) => fe.to_u8(),
        None => return Ok(()), // Empty data implies correct padding.
    };

    let padding_len = fes.len() * 5 % 8;
    if padding_len > 4 {
        return Err(PaddingError::TooMuch);
    }

    let padding_contains_non_zero_bits = match padding_len {
        0 => false,
        1 => last & 0b0001 > 0,
        2 => last & 0b0011 > 0,
        3 => last & 0b0111 > 0,
        _ => last & 0b1111 > 0,
    };
    if padding_contains_non_zero_bits {
        Err(PaddingError::NonZero)
    } else {
        Ok(())
    }
}

/// Converts field elements to bytes, writing exactly `out.len()` bytes.
///
/// `out` must be `byte_len(fes.len())` long. On error `out` is left zeroed.
pub fn fes_to_bytes_into(fes: &[Fe32], out: &mut [u8]) -> Result<(), PaddingError> {
    debug_assert_eq!(out.len(), byte_len(fes.len()));

    if let Err(e) = validate_padding(fes) {
        out.iter_mut().for_each(|b| *b = 0);
        return Err(e);
    }
    for (slot, b) in out.iter_mut().zip(fes.iter().copied().fes_to_bytes()) {
        *slot = b;
    }
    Ok(())
}

/// Converts bytes to field elements, writing exactly `out.len()` values.
///
/// `out` must be `base32_len(bytes.len())` long. The final group is padded
/// with zero bits; this never fails.
pub fn bytes_to_fes_into(bytes: &[u8], out: &mut [Fe32]) {
    debug_assert_eq!(out.len(), base32_len(bytes.len()));

    for (slot, fe) in out.iter_mut().zip(bytes.iter().copied().bytes_to_fes()) {
        *slot = fe;
    }
}

/// Converts field elements to a freshly allocated byte vector.
pub fn fes_to_bytes(fes: &[Fe32]) -> Result<Vec<u8>, PaddingError> {
    validate_padding(fes)?;
    Ok(fes.iter().copied().fes_to_bytes().collect())
}

/// Converts bytes to a freshly allocated vector of field elements.
pub fn bytes_to_fes(bytes: &[u8]) -> Vec<Fe32> { bytes.iter().copied().bytes_to_fes().collect() }

/// Error validating the padding bits when converting field elements to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaddingError {
    /// The data payload has too many bits of padding.
    TooMuch,
    /// The data payload is padded with non-zero bits.
    NonZero,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::TooMuch => write!(f, "the data payload has too many bits of padding"),
            Self::NonZero => write!(f, "the data payload is padded with non-zero bits"),
        }
    }
}

impl std::error::Error for PaddingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::TooMuch | Self::NonZero => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::TryFrom;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn fes(values: &[u8]) -> Vec<Fe32> {
        values.iter().map(|&v| Fe32::try_from(v).unwrap()).collect()
    }

    fn values(fes: &[Fe32]) -> Vec<u8> {
        fes.iter().map(|fe| fe.to_u8()).collect()
    }

    #[test]
    fn lengths() {
        assert_eq!(base32_len(0), 0);
        assert_eq!(base32_len(1), 2);
        assert_eq!(base32_len(20), 32);
        assert_eq!(base32_len(32), 52);
        assert_eq!(base32_len(40), 64);
        assert_eq!(base32_len(41), 66);
        assert_eq!(byte_len(32), 20);
        assert_eq!(byte_len(27), 16);
        assert_eq!(byte_len(0), 0);
    }

    #[test]
    fn known_regrouping() {
        let bytes = [0x75, 0x1e, 0x76, 0xe8, 0x19];
        assert_eq!(values(&bytes_to_fes(&bytes)), vec![14, 20, 15, 7, 13, 26, 0, 25]);
        assert_eq!(fes_to_bytes(&bytes_to_fes(&bytes)).unwrap(), bytes.to_vec());

        // a single byte leaves 2 bits of zero padding
        assert_eq!(values(&bytes_to_fes(&[0xff])), vec![31, 28]);
        assert_eq!(fes_to_bytes(&fes(&[31, 28])).unwrap(), vec![0xff]);
    }

    #[test]
    fn padding_rules() {
        assert_eq!(fes_to_bytes(&[]).unwrap(), Vec::<u8>::new());
        // 5 bits of leftover
        assert_eq!(fes_to_bytes(&fes(&[0])), Err(PaddingError::TooMuch));
        // 7 bits of leftover
        assert_eq!(fes_to_bytes(&fes(&[0, 0, 0])), Err(PaddingError::TooMuch));
        // 2 bits of non-zero leftover
        assert_eq!(fes_to_bytes(&fes(&[31, 29])), Err(PaddingError::NonZero));
        assert_eq!(fes_to_bytes(&fes(&[31, 30])), Err(PaddingError::NonZero));
    }

    #[test]
    fn failed_conversion_zeroes_output() {
        let mut out = [0xaa_u8; 1];
        assert_eq!(fes_to_bytes_into(&fes(&[31, 31]), &mut out), Err(PaddingError::NonZero));
        assert_eq!(out, [0]);
    }

    #[test]
    fn random_roundtrips() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5e6_717);
        for _ in 0..200 {
            let len = rng.gen_range(0..=50);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let fes = bytes_to_fes(&bytes);
            assert_eq!(fes.len(), base32_len(len));
            assert_eq!(fes_to_bytes(&fes).unwrap(), bytes);
            // and back again: the 5-bit form is reproduced including its zero padding
            assert_eq!(bytes_to_fes(&fes_to_bytes(&fes).unwrap()), fes);
        }
    }
}
