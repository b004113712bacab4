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

//! # Bech32 codec
//!
//! Encoding and decoding of complete bech32 strings: the human-readable part
//! (hrp), the separator `1`, the data part and a 6 character checksum.
//!
//! A bech32 string is at most 90 characters long and consists of:
//!
//! - The human-readable part. This part MUST contain 1 to 83 US-ASCII
//!   characters, each in the range [33, 126].
//! - The separator, which is always "1".
//! - The data part, which is at least 6 characters long and only consists of
//!   alphanumeric characters excluding "1", "b", "i", and "o".
//!
//! There are three ways in:
//!
//! - [`decode_into`] / [`encode_into`] work on caller-owned slices whose lengths
//!   fix the shape of the string. This is the core the other two are built on.
//! - [`decode_fixed`] / [`encode_fixed`] are specialised to one (hrp, data)
//!   length pair through const generics. Decoding reports validity as a flag
//!   and zeroes every output on failure.
//! - [`decode`] / [`encode`] take and return ordinary strings and locate the
//!   separator themselves.

use std::fmt;

use bech32::Fe32;

use crate::case::{self, Case};
use crate::charset;
use crate::checksum::{self, CHECKSUM_LENGTH};

/// Separator between the hrp and payload (as defined by BIP-173).
pub const SEP: u8 = b'1';

/// Maximum length of a complete bech32 string.
pub const MAX_LENGTH: usize = 90;

/// Maximum length of the human-readable part.
pub const MAX_HRP_LENGTH: usize = 83;

/// Maximum number of data values (excluding the checksum) that fit in a
/// string of [`MAX_LENGTH`] with a one character hrp.
pub const MAX_DATA_LENGTH: usize = MAX_LENGTH - 1 - 1 - CHECKSUM_LENGTH;

/// Length of the string encoding `hrp_len` hrp bytes and `data_len` data values.
#[inline]
pub const fn encoded_len(hrp_len: usize, data_len: usize) -> usize {
    hrp_len + 1 + data_len + CHECKSUM_LENGTH
}

/// Decodes `address` into `hrp` and `data`, whose lengths select the shape.
///
/// The separator is expected at index `hrp.len()` and `address` must be
/// exactly `encoded_len(hrp.len(), data.len())` bytes. On success `hrp` holds
/// the lower-cased human-readable part and `data` the data values without
/// the checksum. On error both are zeroed.
pub fn decode_into(address: &[u8], hrp: &mut [u8], data: &mut [Fe32]) -> Result<(), Error> {
    let res = decode_unzeroed(address, hrp, data);
    if res.is_err() {
        hrp.iter_mut().for_each(|b| *b = 0);
        data.iter_mut().for_each(|fe| *fe = Fe32::Q);
    }
    res
}

fn decode_unzeroed(address: &[u8], hrp: &mut [u8], data: &mut [Fe32]) -> Result<(), Error> {
    let hrp_len = hrp.len();
    let expected = encoded_len(hrp_len, data.len());
    if address.len() != expected {
        return Err(Error::LengthMismatch { expected, found: address.len() });
    }
    if address.len() > MAX_LENGTH {
        return Err(Error::InvalidLength(address.len()));
    }
    if hrp_len == 0 || hrp_len > MAX_HRP_LENGTH {
        return Err(Error::InvalidHrpLength(hrp_len));
    }
    if case::classify(address) == Case::Mixed {
        return Err(Error::MixedCase);
    }

    let (raw_hrp, rest) = address.split_at(hrp_len);
    if let Some(&b) = raw_hrp.iter().find(|&&b| !case::is_printable(b)) {
        return Err(Error::InvalidHrpChar(b));
    }
    if rest[0] != SEP {
        return Err(Error::MissingSeparator);
    }

    let mut engine = checksum::Engine::new();
    engine.input_hrp(raw_hrp);
    let mut slots = data.iter_mut();
    for &b in &rest[1..] {
        let fe = charset::index_of(b).ok_or(Error::InvalidChar(b))?;
        engine.input_fe(fe);
        // The slots run out exactly where the checksum starts.
        if let Some(slot) = slots.next() {
            *slot = fe;
        }
    }
    if engine.residue() != 1 {
        return Err(Error::InvalidChecksum);
    }

    for (out, b) in hrp.iter_mut().zip(raw_hrp) {
        *out = b.to_ascii_lowercase();
    }
    Ok(())
}

/// Encodes `hrp` and `data` into `out`, which must be exactly
/// `encoded_len(hrp.len(), data.len())` bytes.
///
/// Total over its inputs: the hrp is lower-cased but not otherwise
/// validated. Use [`encode`] to reject malformed prefixes.
pub fn encode_into(hrp: &[u8], data: &[Fe32], out: &mut [u8]) {
    debug_assert_eq!(out.len(), encoded_len(hrp.len(), data.len()));
    for (slot, b) in out.iter_mut().zip(render(hrp, data)) {
        *slot = b;
    }
}

/// Renders the characters of the encoded string, lower case.
fn render<'a>(hrp: &'a [u8], data: &'a [Fe32]) -> impl Iterator<Item = u8> + 'a {
    let checksum = checksum::compute(hrp, data);
    hrp.iter()
        .map(|b| b.to_ascii_lowercase())
        .chain(Some(SEP))
        .chain(data.iter().map(|&fe| charset::char_of(fe)))
        .chain((0..CHECKSUM_LENGTH).map(move |i| charset::char_of(checksum[i])))
}

/// Result of [`decode_fixed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedDecoded<const H: usize, const D: usize> {
    /// Whether the string decoded successfully.
    pub valid: bool,
    /// The lower-cased hrp, all zero when invalid.
    pub hrp: [u8; H],
    /// The data values without checksum, all zero when invalid.
    pub data: [Fe32; D],
}

/// Decodes an `L` byte string with an `H` byte hrp and `D` data values.
///
/// The separator position is fixed at index `H`. A shape where
/// `L != H + 1 + D + 6` can never be valid and decodes as invalid.
pub fn decode_fixed<const H: usize, const D: usize, const L: usize>(
    address: &[u8; L],
) -> FixedDecoded<H, D> {
    let mut hrp = [0; H];
    let mut data = [Fe32::Q; D];
    let valid = decode_into(&address[..], &mut hrp, &mut data).is_ok();
    FixedDecoded { valid, hrp, data }
}

struct EncodeShape<const H: usize, const D: usize, const L: usize>;

impl<const H: usize, const D: usize, const L: usize> EncodeShape<H, D, L> {
    const CHECK: () = assert!(L == H + 1 + D + CHECKSUM_LENGTH, "output length must be H + D + 7");
}

/// Encodes an `H` byte hrp and `D` data values into an `L` byte string.
///
/// `L` must equal `H + 1 + D + 6`; other shapes fail to compile.
pub fn encode_fixed<const H: usize, const D: usize, const L: usize>(
    hrp: &[u8; H],
    data: &[Fe32; D],
) -> [u8; L] {
    let () = EncodeShape::<H, D, L>::CHECK;
    let mut out = [0; L];
    encode_into(&hrp[..], &data[..], &mut out);
    out
}

/// Decodes a bech32 string into its lower-cased hrp and data values.
///
/// The separator is the last `1` in the string.
pub fn decode(s: &str) -> Result<(String, Vec<Fe32>), Error> {
    let bytes = s.as_bytes();
    if bytes.len() > MAX_LENGTH {
        return Err(Error::InvalidLength(bytes.len()));
    }
    let sep = bytes.iter().rposition(|&b| b == SEP).ok_or(Error::MissingSeparator)?;
    let data_len = (bytes.len() - sep - 1)
        .checked_sub(CHECKSUM_LENGTH)
        .ok_or(Error::InvalidChecksumLength)?;

    let mut hrp = vec![0; sep];
    let mut data = vec![Fe32::Q; data_len];
    decode_into(bytes, &mut hrp, &mut data)?;
    // decode_into only succeeds on printable ASCII
    let hrp: String = hrp.into_iter().map(char::from).collect();
    Ok((hrp, data))
}

/// Validates an hrp and the resulting string length for encoding.
fn check_encodable(hrp: &str, data_len: usize) -> Result<(), Error> {
    let bytes = hrp.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_HRP_LENGTH {
        return Err(Error::InvalidHrpLength(bytes.len()));
    }
    if let Some(&b) = bytes.iter().find(|&&b| !case::is_printable(b)) {
        return Err(Error::InvalidHrpChar(b));
    }
    let len = encoded_len(bytes.len(), data_len);
    if len > MAX_LENGTH {
        return Err(Error::InvalidLength(len));
    }
    Ok(())
}

/// Encodes `data` under `hrp` as a lower-case bech32 string.
pub fn encode(hrp: &str, data: &[Fe32]) -> Result<String, Error> {
    check_encodable(hrp, data.len())?;
    Ok(render(hrp.as_bytes(), data).map(char::from).collect())
}

/// Encodes `data` under `hrp` to a [`fmt::Write`] without allocating.
pub fn encode_to_fmt<W: fmt::Write>(mut fmt: W, hrp: &str, data: &[Fe32]) -> fmt::Result {
    check_encodable(hrp, data.len()).map_err(|_| fmt::Error)?;
    for b in render(hrp.as_bytes(), data) {
        fmt.write_char(char::from(b))?;
    }
    Ok(())
}

/// Errors when decoding or encoding a bech32 string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The string is longer than 90 characters.
    InvalidLength(usize),
    /// The string length does not match the requested hrp and data lengths.
    LengthMismatch {
        /// Length implied by the hrp and data lengths.
        expected: usize,
        /// Length of the input.
        found: usize,
    },
    /// The hrp is empty or longer than 83 characters.
    InvalidHrpLength(usize),
    /// The hrp contains a byte outside of [33, 126].
    InvalidHrpChar(u8),
    /// The separator is missing or not where expected.
    MissingSeparator,
    /// The data part is shorter than a checksum.
    InvalidChecksumLength,
    /// The data part contains a byte outside of the bech32 alphabet.
    InvalidChar(u8),
    /// The whole string must be of one case.
    MixedCase,
    /// The checksum does not match the rest of the data.
    InvalidChecksum,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidLength(len) => write!(f, "invalid length {}, maximum is {}", len, MAX_LENGTH),
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected a string of length {}, got {}", expected, found)
            }
            Self::InvalidHrpLength(len) => write!(f, "the hrp must be 1 to 83 characters, not {}", len),
            Self::InvalidHrpChar(b) => write!(f, "invalid hrp character (code={:#04x})", b),
            Self::MissingSeparator => write!(f, "missing human-readable separator, \"{}\"", SEP as char),
            Self::InvalidChecksumLength => write!(f, "the checksum is not a valid length"),
            Self::InvalidChar(b) => write!(f, "invalid character (code={:#04x})", b),
            Self::MixedCase => write!(f, "mixed-case strings not allowed"),
            Self::InvalidChecksum => write!(f, "invalid checksum"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}
