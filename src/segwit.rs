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

//! # Segwit
//!
//! Segregated-witness addresses on top of the bech32 codec. The first data
//! value is the witness version and the remaining values regroup into the
//! witness program bytes.
//!
//! Every witness version, 0 through 16, is checked against the original
//! bech32 checksum.

use std::convert::TryFrom;
use std::fmt;

use bech32::Fe32;

use crate::checksum::{self, CHECKSUM_LENGTH};
use crate::codec::{self, MAX_DATA_LENGTH, MAX_HRP_LENGTH, MAX_LENGTH};
use crate::convert::{self, PaddingError};
use crate::error::write_err;

/// Minimum length of a witness program.
pub const MIN_PROGRAM_LENGTH: usize = 2;

/// Maximum length of a witness program.
pub const MAX_PROGRAM_LENGTH: usize = 40;

/// Most bytes the data part of a maximal string regroups into.
const MAX_CONVERTED_LENGTH: usize = convert::byte_len(MAX_DATA_LENGTH - 1);

/// Version value plus the regrouped program.
const MAX_PROGRAM_DATA_LENGTH: usize = 1 + convert::base32_len(MAX_PROGRAM_LENGTH);

/// A witness version, 0 to 16 inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WitnessVersion(u8);

impl WitnessVersion {
    /// Witness version 0.
    pub const V0: WitnessVersion = WitnessVersion(0);
    /// Witness version 1.
    pub const V1: WitnessVersion = WitnessVersion(1);
    /// The largest witness version.
    pub const V16: WitnessVersion = WitnessVersion(16);

    /// Returns the version as an integer.
    #[inline]
    pub fn to_u8(self) -> u8 { self.0 }

    /// Returns the version as the first data value of an address.
    #[inline]
    pub fn to_fe(self) -> Fe32 { checksum::fe_from_u5(self.0) }
}

impl TryFrom<u8> for WitnessVersion {
    type Error = SegwitError;

    fn try_from(v: u8) -> Result<Self, SegwitError> {
        if v > WitnessVersion::V16.0 {
            Err(SegwitError::InvalidWitnessVersion(v))
        } else {
            Ok(WitnessVersion(v))
        }
    }
}

impl TryFrom<Fe32> for WitnessVersion {
    type Error = SegwitError;

    fn try_from(fe: Fe32) -> Result<Self, SegwitError> { WitnessVersion::try_from(fe.to_u8()) }
}

impl fmt::Display for WitnessVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

/// A witness version together with its program bytes.
///
/// Construction enforces the segwit length rules, so every value of this
/// type can be encoded.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WitnessProgram {
    version: WitnessVersion,
    len: u8,
    program: [u8; MAX_PROGRAM_LENGTH],
}

impl WitnessProgram {
    /// Creates a witness program, checking the length rules:
    ///
    /// - the program is 2 to 40 bytes long, and
    /// - a version 0 program is either 20 or 32 bytes long.
    pub fn new(version: WitnessVersion, program: &[u8]) -> Result<Self, SegwitError> {
        let len = program.len();
        if len < MIN_PROGRAM_LENGTH || len > MAX_PROGRAM_LENGTH {
            return Err(SegwitError::InvalidWitnessProgramLength(len));
        }
        if version == WitnessVersion::V0 && len != 20 && len != 32 {
            return Err(SegwitError::InvalidSegwitV0ProgramLength(len));
        }

        let mut ret = WitnessProgram { version, len: len as u8, program: [0; MAX_PROGRAM_LENGTH] };
        ret.program[..len].copy_from_slice(program);
        Ok(ret)
    }

    /// Builds a witness program from the data values of an address, the
    /// first of which is the witness version.
    pub fn from_data(data: &[Fe32]) -> Result<Self, SegwitError> {
        let (&version, program) = data.split_first().ok_or(SegwitError::MissingWitnessVersion)?;
        let version = WitnessVersion::try_from(version)?;

        let n = convert::byte_len(program.len());
        if n > MAX_CONVERTED_LENGTH {
            return Err(SegwitError::InvalidWitnessProgramLength(n));
        }
        let mut bytes = [0; MAX_CONVERTED_LENGTH];
        convert::fes_to_bytes_into(program, &mut bytes[..n])?;
        WitnessProgram::new(version, &bytes[..n])
    }

    /// Returns the witness version.
    #[inline]
    pub fn version(&self) -> WitnessVersion { self.version }

    /// Returns the program bytes.
    #[inline]
    pub fn program(&self) -> &[u8] { &self.program[..usize::from(self.len)] }

    /// Whether this is a version 0 program of 20 bytes (pay to witness key hash).
    pub fn is_p2wpkh(&self) -> bool { self.version == WitnessVersion::V0 && self.len == 20 }

    /// Whether this is a version 0 program of 32 bytes (pay to witness script hash).
    pub fn is_p2wsh(&self) -> bool { self.version == WitnessVersion::V0 && self.len == 32 }

    /// Returns the data values of the address: the version followed by the
    /// program regrouped into 5-bit values. Only the first `n` are used.
    fn to_data(&self) -> ([Fe32; MAX_PROGRAM_DATA_LENGTH], usize) {
        let program = self.program();
        let n = 1 + convert::base32_len(program.len());
        let mut data = [Fe32::Q; MAX_PROGRAM_DATA_LENGTH];
        data[0] = self.version.to_fe();
        convert::bytes_to_fes_into(program, &mut data[1..n]);
        (data, n)
    }
}

impl fmt::Debug for WitnessProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WitnessProgram")
            .field("version", &self.version)
            .field("program", &self.program())
            .finish()
    }
}

/// Length of the address encoding a `program_len` byte program under a
/// `hrp_len` byte hrp.
#[inline]
pub const fn encoded_len(hrp_len: usize, program_len: usize) -> usize {
    codec::encoded_len(hrp_len, 1 + convert::base32_len(program_len))
}

/// Number of program bytes an `addr_len` byte address with a `hrp_len` byte
/// hrp regroups into.
#[inline]
pub const fn program_capacity(hrp_len: usize, addr_len: usize) -> usize {
    if addr_len > hrp_len + 2 + CHECKSUM_LENGTH {
        convert::byte_len(addr_len - hrp_len - 2 - CHECKSUM_LENGTH)
    } else {
        0
    }
}

/// Decodes an address whose hrp must equal `expected_hrp` (ignoring case).
///
/// The separator is expected at index `expected_hrp.len()`, so the address
/// length fixes the number of data values.
pub fn decode_bytes(expected_hrp: &[u8], address: &[u8]) -> Result<WitnessProgram, SegwitError> {
    let hrp_len = expected_hrp.len();
    if address.len() > MAX_LENGTH {
        return Err(codec::Error::InvalidLength(address.len()).into());
    }
    if hrp_len == 0 || hrp_len > MAX_HRP_LENGTH {
        return Err(codec::Error::InvalidHrpLength(hrp_len).into());
    }
    let min = codec::encoded_len(hrp_len, 0);
    let data_len = address
        .len()
        .checked_sub(min)
        .ok_or(codec::Error::LengthMismatch { expected: min, found: address.len() })?;

    let mut hrp = [0; MAX_HRP_LENGTH];
    let mut data = [Fe32::Q; MAX_DATA_LENGTH];
    let hrp = &mut hrp[..hrp_len];
    let data = &mut data[..data_len];
    codec::decode_into(address, hrp, data)?;

    if !hrp.iter().zip(expected_hrp).all(|(got, want)| *got == want.to_ascii_lowercase()) {
        return Err(SegwitError::HrpMismatch);
    }
    WitnessProgram::from_data(data)
}

/// Decodes a segwit address with any hrp, returning the lower-cased hrp and
/// the witness program.
pub fn decode_any(s: &str) -> Result<(String, WitnessProgram), SegwitError> {
    let (hrp, data) = codec::decode(s)?;
    let program = WitnessProgram::from_data(&data)?;
    Ok((hrp, program))
}

/// Decodes a segwit address whose hrp must equal `expected_hrp` (ignoring case).
pub fn decode(expected_hrp: &str, s: &str) -> Result<WitnessProgram, SegwitError> {
    let (hrp, data) = codec::decode(s)?;
    if !hrp.eq_ignore_ascii_case(expected_hrp) {
        return Err(SegwitError::HrpMismatch);
    }
    WitnessProgram::from_data(&data)
}

/// Encodes `program` under `hrp` into `out`, which must be exactly
/// `encoded_len(hrp.len(), program.program().len())` bytes.
///
/// Like [`codec::encode_into`], the hrp is lower-cased but not validated.
pub fn encode_into(hrp: &[u8], program: &WitnessProgram, out: &mut [u8]) {
    let (data, n) = program.to_data();
    codec::encode_into(hrp, &data[..n], out);
}

/// Encodes `program` under `hrp` as a lower-case address.
pub fn encode(hrp: &str, program: &WitnessProgram) -> Result<String, SegwitError> {
    let (data, n) = program.to_data();
    Ok(codec::encode(hrp, &data[..n])?)
}

/// Encodes `program` under `hrp` to a [`fmt::Write`] without allocating.
pub fn encode_to_fmt<W: fmt::Write>(fmt: W, hrp: &str, program: &WitnessProgram) -> fmt::Result {
    let (data, n) = program.to_data();
    codec::encode_to_fmt(fmt, hrp, &data[..n])
}

/// Result of [`decode_fixed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedSegwitDecoded<const P: usize> {
    /// Whether the address decoded to a valid witness program.
    pub valid_input: bool,
    /// The witness version, 0 when invalid.
    pub witver: u8,
    /// The program bytes left-aligned and zero-filled, all zero when invalid.
    pub witprog: [u8; P],
}

/// Decodes an `L` byte address with an `H` byte hrp into a program of at
/// most `P` bytes.
///
/// `P` must be [`program_capacity`]`(H, L)`; any other capacity decodes as
/// invalid, as does any address failing the bech32 or segwit rules.
pub fn decode_fixed<const H: usize, const L: usize, const P: usize>(
    expected_hrp: &[u8; H],
    address: &[u8; L],
) -> FixedSegwitDecoded<P> {
    let mut ret = FixedSegwitDecoded { valid_input: false, witver: 0, witprog: [0; P] };
    if P != program_capacity(H, L) {
        return ret;
    }
    if let Ok(program) = decode_bytes(&expected_hrp[..], &address[..]) {
        for (slot, b) in ret.witprog.iter_mut().zip(program.program()) {
            *slot = *b;
        }
        ret.witver = program.version().to_u8();
        ret.valid_input = true;
    }
    ret
}

/// Result of [`encode_fixed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedSegwitEncoded<const L: usize> {
    /// Whether the version and program were encodable.
    pub success: bool,
    /// The address, all zero on failure.
    pub out: [u8; L],
}

struct EncodeShape<const H: usize, const N: usize, const L: usize>;

impl<const H: usize, const N: usize, const L: usize> EncodeShape<H, N, L> {
    const CHECK: () = assert!(
        L == H + 2 + convert::base32_len(N) + CHECKSUM_LENGTH,
        "output length must be H + 2 + ceil(8N / 5) + 6"
    );
}

/// Encodes witness version `witver` and an `N` byte program under an `H`
/// byte hrp into an `L` byte address.
///
/// `L` must equal [`encoded_len`]`(H, N)`; other shapes fail to compile.
pub fn encode_fixed<const H: usize, const N: usize, const L: usize>(
    hrp: &[u8; H],
    witver: u8,
    witprog: &[u8; N],
) -> FixedSegwitEncoded<L> {
    let () = EncodeShape::<H, N, L>::CHECK;
    let mut ret = FixedSegwitEncoded { success: false, out: [0; L] };
    let program = WitnessVersion::try_from(witver).and_then(|v| WitnessProgram::new(v, &witprog[..]));
    if let Ok(program) = program {
        encode_into(&hrp[..], &program, &mut ret.out);
        ret.success = true;
    }
    ret
}

/// An error while decoding or encoding a segwit address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SegwitError {
    /// Error in the underlying bech32 string.
    Codec(codec::Error),
    /// The hrp is not the expected one.
    HrpMismatch,
    /// The witness version byte is missing.
    MissingWitnessVersion,
    /// Invalid witness version (must be 0-16 inclusive).
    InvalidWitnessVersion(u8),
    /// Invalid padding on the witness data.
    Padding(PaddingError),
    /// The witness program must be between 2 and 40 bytes in length.
    InvalidWitnessProgramLength(usize),
    /// A v0 witness program must be either of length 20 or 32.
    InvalidSegwitV0ProgramLength(usize),
}

impl fmt::Display for SegwitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Codec(ref e) => write_err!(f, "bech32 error"; e),
            Self::HrpMismatch => write!(f, "the human-readable part does not match"),
            Self::MissingWitnessVersion => write!(f, "the witness version byte is missing"),
            Self::InvalidWitnessVersion(v) => write!(f, "invalid segwit witness version: {}", v),
            Self::Padding(ref e) => write_err!(f, "invalid padding on the witness data"; e),
            Self::InvalidWitnessProgramLength(len) => {
                write!(f, "the witness program must be between 2 and 40 bytes in length, not {}", len)
            }
            Self::InvalidSegwitV0ProgramLength(len) => {
                write!(f, "a v0 witness program must be length 20 or 32, not {}", len)
            }
        }
    }
}

impl std::error::Error for SegwitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Codec(ref e) => Some(e),
            Self::Padding(ref e) => Some(e),
            Self::HrpMismatch
            | Self::MissingWitnessVersion
            | Self::InvalidWitnessVersion(_)
            | Self::InvalidWitnessProgramLength(_)
            | Self::InvalidSegwitV0ProgramLength(_) => None,
        }
    }
}

impl From<codec::Error> for SegwitError {
    #[inline]
    fn from(e: codec::Error) -> Self { Self::Codec(e) }
}

impl From<PaddingError> for SegwitError {
    #[inline]
    fn from(e: PaddingError) -> Self { Self::Padding(e) }
}
