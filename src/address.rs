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

//! # Addresses
//!
//! Segwit addresses tied to a network through its human-readable part.

use std::fmt;
use std::str::FromStr;

use crate::segwit::{self, SegwitError, WitnessProgram};

/// The parameters to derive addresses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressParams {
    /// The bech32 HRP for segwit addresses.
    pub bech_hrp: &'static str,
}

impl AddressParams {
    /// The Bitcoin mainnet address parameters.
    pub const BITCOIN: AddressParams = AddressParams { bech_hrp: "bc" };

    /// The Bitcoin testnet address parameters.
    pub const TESTNET: AddressParams = AddressParams { bech_hrp: "tb" };

    /// The Bitcoin regtest address parameters.
    pub const REGTEST: AddressParams = AddressParams { bech_hrp: "bcrt" };
}

/// A segwit address.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    /// the lower-cased human-readable part
    hrp: String,
    /// the witness version and program
    program: WitnessProgram,
}

impl Address {
    /// Creates an address, checking that `hrp` is 1 to 83 printable
    /// characters and that the result fits in 90 characters.
    pub fn new(hrp: &str, program: WitnessProgram) -> Result<Address, SegwitError> {
        // Rendering validates the hrp and the total length.
        segwit::encode(hrp, &program)?;
        Ok(Address { hrp: hrp.to_ascii_lowercase(), program })
    }

    /// Creates an address for the network described by `params`.
    ///
    /// The hrp of `params` is checked like the one given to [`Address::new`],
    /// since callers may build their own parameters.
    pub fn from_params(
        params: &AddressParams,
        program: WitnessProgram,
    ) -> Result<Address, SegwitError> {
        Address::new(params.bech_hrp, program)
    }

    /// Parses an address, requiring the hrp of `params`.
    pub fn parse_with_params(s: &str, params: &AddressParams) -> Result<Address, SegwitError> {
        let program = segwit::decode(params.bech_hrp, s)?;
        Address::from_params(params, program)
    }

    /// Returns the lower-cased human-readable part.
    pub fn hrp(&self) -> &str { &self.hrp }

    /// Returns the witness version and program.
    pub fn witness_program(&self) -> &WitnessProgram { &self.program }

    /// Whether the address belongs to the network described by `params`.
    pub fn is_valid_for(&self, params: &AddressParams) -> bool {
        self.hrp.eq_ignore_ascii_case(params.bech_hrp)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        segwit::encode_to_fmt(fmt, &self.hrp, &self.program)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl FromStr for Address {
    type Err = SegwitError;

    fn from_str(s: &str) -> Result<Address, SegwitError> {
        let (hrp, program) = segwit::decode_any(s)?;
        Ok(Address { hrp, program })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt::Formatter;

        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Address;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a segwit address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Address::from_str(v).map_err(E::custom)
            }

            fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(v)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
