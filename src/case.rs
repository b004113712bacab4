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

//! # Case
//!
//! Case consistency of an encoded string. A bech32 string must be entirely
//! lower case or entirely upper case, hrp, data and checksum alike.

/// The casing of a byte sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    /// No upper-case ASCII letters. Sequences with no letters at all land here.
    Lower,
    /// Upper-case ASCII letters and no lower-case ones.
    Upper,
    /// Both upper- and lower-case ASCII letters.
    Mixed,
}

/// Classifies the casing of `bytes`. Only ASCII letters count; every other
/// byte is case-neutral.
pub fn classify(bytes: &[u8]) -> Case {
    let mut has_upper = false;
    let mut has_lower = false;
    for b in bytes {
        if b.is_ascii_uppercase() {
            has_upper = true;
        } else if b.is_ascii_lowercase() {
            has_lower = true;
        }
    }
    match (has_lower, has_upper) {
        (true, true) => Case::Mixed,
        (false, true) => Case::Upper,
        _ => Case::Lower,
    }
}

/// Whether `b` lies in the printable US-ASCII range [33, 126] allowed in an hrp.
#[inline]
pub fn is_printable(b: u8) -> bool {
    (33..=126).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_cases() {
        assert_eq!(classify(b"a12uel5l"), Case::Lower);
        assert_eq!(classify(b"A12UEL5L"), Case::Upper);
        assert_eq!(classify(b"A12uel5l"), Case::Mixed);
        assert_eq!(classify(b"?1234"), Case::Lower);
        assert_eq!(classify(b""), Case::Lower);
        // the checksum region counts too
        assert_eq!(classify(b"tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sL5k7"), Case::Mixed);
    }

    #[test]
    fn printable_bounds() {
        assert!(!is_printable(b' '));
        assert!(is_printable(b'!'));
        assert!(is_printable(b'~'));
        assert!(!is_printable(0x7f));
        assert!(!is_printable(0x80));
    }
}
