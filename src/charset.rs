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

//! # Charset
//!
//! The 32 data characters of the bech32 alphabet and their 5-bit values.
//! Lookups go through [`Fe32`], which owns the alphabet tables.

use bech32::Fe32;

/// Encoding character set. Maps data value -> char
pub const CHARSET: [u8; 32] = *b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Returns the 5-bit value of a data character, or `None` if the byte is not
/// in the bech32 alphabet.
///
/// Both cases are accepted; case consistency is checked separately by
/// [`crate::case::classify`].
#[inline]
pub fn index_of(b: u8) -> Option<Fe32> {
    if !b.is_ascii() {
        return None;
    }
    Fe32::from_char(char::from(b)).ok()
}

/// Returns the lower-case data character for a 5-bit value.
#[inline]
pub fn char_of(fe: Fe32) -> u8 {
    // The alphabet is ASCII.
    fe.to_char() as u8
}

/// Whether `b` is a data character (either case).
#[inline]
pub fn is_member(b: u8) -> bool {
    index_of(b).is_some()
}
