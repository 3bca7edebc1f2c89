//! # blspair
//!
//! Codec, validation pipeline and evaluation of the BLS12-381 pairing check
//! precompile from [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537).
//!
//! An input of `384 * k` bytes is split into `k` (G1, G2) pairs, every field
//! element, curve equation and subgroup membership is verified, and the output
//! is a 32 byte word whose last byte is `1` iff the product of pairings is the
//! identity of the target group.
//!
//! ```
//! use blspair::{pairing_check, PairingError};
//!
//! assert_eq!(pairing_check(&[]), Err(PairingError::InvalidLength));
//! // A single pair of points at infinity.
//! let output = pairing_check(&[0u8; 384]).unwrap();
//! assert_eq!(output[31], 1);
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bls12_381;
pub mod bls12_381_const;
pub mod interface;

pub use bls12_381::pairing::{
    encode_result, evaluate, pairing_check, pairing_check_with, pairing_gas, pairing_run,
};
pub use bls12_381::{
    ArkworksBackend, Bls12381Backend, DefaultBackend, PairingInput, PairingPair,
};
#[cfg(feature = "blst")]
pub use bls12_381::BlstBackend;
pub use interface::*;
