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

//! # Fixed-Width Bech32 Library
//!
//! Bech32 (BIP-173) strings and segwit addresses, decoded and encoded in
//! shapes fixed at compile time. Every length is a const generic parameter,
//! so the fixed-shape entry points never allocate and an encode call with an
//! impossible shape is rejected by the compiler.
//!
//! A variable-length API returning [`Result`]s sits on the same core, along
//! with an [`Address`] type for whole-network segwit addresses.
//!
//! ```
//! use fixed_bech32::segwit;
//!
//! let dec = segwit::decode_fixed::<2, 42, 20>(b"bc", b"bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
//! assert!(dec.valid_input);
//! assert_eq!(dec.witver, 0);
//!
//! let enc = segwit::encode_fixed::<2, 20, 42>(b"bc", 0, &dec.witprog);
//! assert!(enc.success);
//! assert_eq!(&enc.out[..], &b"bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"[..]);
//! ```
//!

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub extern crate bech32;
/// Re-export of serde crate
#[cfg(feature = "serde")]
pub extern crate actual_serde as serde;

#[cfg(test)] extern crate rand;
#[cfg(test)] extern crate rand_chacha;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;
#[cfg(all(test, feature = "serde"))] extern crate serde_test;

mod error;
pub mod address;
pub mod case;
pub mod charset;
pub mod checksum;
pub mod codec;
pub mod convert;
pub mod segwit;

// export everything at the top level so it can be used as `fixed_bech32::Address` etc.
pub use bech32::Fe32;
pub use crate::address::{Address, AddressParams};
pub use crate::codec::Error;
pub use crate::convert::PaddingError;
pub use crate::segwit::{SegwitError, WitnessProgram, WitnessVersion};
