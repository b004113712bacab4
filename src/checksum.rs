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

//! # Checksum
//!
//! The BCH checksum of BIP-173, run on the checksum engine of the `bech32`
//! crate with its [`Bech32`] parameters (residue 1, 6 values).
//!
//! Only the original bech32 constant is supported. It is used for every
//! witness version, including 1 to 16.

use std::convert::TryFrom;
use std::iter;

use bech32::primitives::checksum;
use bech32::{Bech32, Checksum, Fe32};

/// Number of 5-bit values in a checksum.
pub const CHECKSUM_LENGTH: usize = Bech32::CHECKSUM_LENGTH;

/// Generator coefficients
pub const GEN: [u32; 5] = Bech32::GENERATOR_SH;

/// Runs the polymod over a stream of 5-bit values.
///
/// Unlike the engine it wraps, the hrp is taken as raw bytes, so checksums
/// can be computed for prefixes that would not pass hrp validation.
/// Construct one per checksum; it is not reusable.
pub struct Engine {
    inner: checksum::Engine<Bech32>,
}

impl Default for Engine {
    fn default() -> Self { Self::new() }
}

impl Engine {
    /// Constructs a new checksum engine with the initial residue of 1.
    #[inline]
    pub fn new() -> Self { Engine { inner: checksum::Engine::new() } }

    /// Feeds the expansion of `hrp` (see [`hrp_expand`]) into the engine.
    #[inline]
    pub fn input_hrp(&mut self, hrp: &[u8]) {
        for v in hrp_expand(hrp) {
            self.inner.input_fe(fe_from_u5(v));
        }
    }

    /// Feeds a single field element into the engine.
    #[inline]
    pub fn input_fe(&mut self, fe: Fe32) { self.inner.input_fe(fe) }

    /// Feeds the target residue; afterwards the residue is the checksum.
    #[inline]
    pub fn input_target_residue(&mut self) { self.inner.input_target_residue() }

    /// Returns the current residue.
    #[inline]
    pub fn residue(&self) -> u32 { *self.inner.residue() }
}

/// Expands an hrp for checksum computation: the high 3 bits of every byte, a
/// zero, then the low 5 bits of every byte.
///
/// Bytes are lower-cased first, so `"BC"` and `"bc"` expand identically.
pub fn hrp_expand(hrp: &[u8]) -> impl Iterator<Item = u8> + '_ {
    let high = hrp.iter().map(|b| b.to_ascii_lowercase() >> 5);
    let low = hrp.iter().map(|b| b.to_ascii_lowercase() & 0x1f);
    high.chain(iter::once(0)).chain(low)
}

/// Computes the polymod of a raw sequence of values, each masked to 5 bits.
pub fn polymod<I: IntoIterator<Item = u8>>(values: I) -> u32 {
    let mut engine = Engine::new();
    for v in values {
        engine.input_fe(fe_from_u5(v));
    }
    engine.residue()
}

/// Whether `data`, which ends with the 6 checksum values, carries a valid
/// checksum for `hrp`.
pub fn verify(hrp: &[u8], data: &[Fe32]) -> bool {
    let mut engine = Engine::new();
    engine.input_hrp(hrp);
    for &fe in data {
        engine.input_fe(fe);
    }
    engine.residue() == Bech32::TARGET_RESIDUE
}

/// Computes the 6 checksum values for `hrp` and `data`.
pub fn compute(hrp: &[u8], data: &[Fe32]) -> [Fe32; CHECKSUM_LENGTH] {
    let mut engine = Engine::new();
    engine.input_hrp(hrp);
    for &fe in data {
        engine.input_fe(fe);
    }
    engine.input_target_residue();
    let residue = engine.residue();

    let mut checksum = [Fe32::Q; CHECKSUM_LENGTH];
    for (p, fe) in checksum.iter_mut().enumerate() {
        *fe = fe_from_u5((residue >> (5 * (CHECKSUM_LENGTH - 1 - p))) as u8);
    }
    checksum
}

/// Converts the low 5 bits of `v` to a field element.
pub(crate) fn fe_from_u5(v: u8) -> Fe32 {
    // Unwrap ok since every 5-bit value is a field element.
    Fe32::try_from(v & 0x1f).expect("masked to 5 bits")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::charset;

    fn fes(values: &[u8]) -> Vec<Fe32> {
        values.iter().map(|&v| Fe32::try_from(v).unwrap()).collect()
    }

    #[test]
    fn test_hrp_expand() {
        assert_eq!(hrp_expand(b"bc").collect::<Vec<_>>(), vec![3, 3, 0, 2, 3]);
        assert_eq!(hrp_expand(b"BC").collect::<Vec<_>>(), vec![3, 3, 0, 2, 3]);
        assert_eq!(hrp_expand(b"?").collect::<Vec<_>>(), vec![1, 0, 31]);
    }

    #[test]
    fn test_checksum() {
        // a12uel5l
        let cs = compute(b"a", &[]);
        let expected_cs = vec![10, 28, 25, 31, 20, 31];
        for i in 0..expected_cs.len() {
            assert_eq!(expected_cs[i], cs[i].to_u8());
        }
        assert_eq!(compute(b"A", &[]), cs);
    }

    #[test]
    fn test_verify() {
        let data: Vec<Fe32> = b"qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw"
            .iter()
            .map(|&b| charset::index_of(b).unwrap())
            .collect();
        assert!(verify(b"abcdef", &data));
        assert!(!verify(b"abcdeg", &data));
        assert!(!verify(b"abcdef", &data[1..]));
    }

    #[test]
    fn test_polymod_matches_engine() {
        let data = fes(&[0, 1, 2, 3, 31, 30, 29]);
        let mut engine = Engine::new();
        engine.input_hrp(b"split");
        for &fe in &data {
            engine.input_fe(fe);
        }
        let raw = hrp_expand(b"split").chain(data.iter().map(|fe| fe.to_u8()));
        assert_eq!(polymod(raw), engine.residue());
        assert!(engine.residue() < 1 << 30);
    }

    #[test]
    fn generator_constants() {
        assert_eq!(GEN, [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3]);
        assert_eq!(CHECKSUM_LENGTH, 6);
    }

    #[test]
    fn five_bit_conversion() {
        for v in 0..=255u8 {
            assert_eq!(fe_from_u5(v).to_u8(), v & 0x1f);
        }
    }

    #[test]
    fn raw_hrp_bytes() {
        // bytes outside of printable ASCII still expand into 5-bit values
        assert_eq!(hrp_expand(b"\xff").collect::<Vec<_>>(), vec![7, 0, 31]);
        let cs = compute(b"\xff ", &[]);
        let mut full = cs.to_vec();
        assert!(verify(b"\xff ", &full));
        full[0] = fe_from_u5(full[0].to_u8() ^ 1);
        assert!(!verify(b"\xff ", &full));
    }

    #[test]
    fn computed_checksum_verifies() {
        let data = fes(&[24, 23, 25, 24, 22, 28, 1, 16, 11, 29, 8, 25]);
        let mut full = data.clone();
        full.extend_from_slice(&compute(b"split", &data));
        assert!(verify(b"split", &full));
        assert!(verify(b"SPLIT", &full));
    }
}
