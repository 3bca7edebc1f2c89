//! Interface for the pairing precompile. It contains the precompile result type,
//! the precompile output type, and the error type shared by every stage of the
//! decoding and pairing pipeline.
use alloy_primitives::{Address, Bytes};
use core::fmt;

/// A precompile operation result type
///
/// Returns either `Ok((gas_used, return_bytes))` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PairingError>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Precompile function type. Takes input and gas limit and returns precompile result.
pub type PrecompileFn = fn(&[u8], u64) -> PrecompileResult;

/// Precompile and its address.
#[derive(Clone, Debug)]
pub struct PrecompileWithAddress(pub Address, pub PrecompileFn);

impl From<(Address, PrecompileFn)> for PrecompileWithAddress {
    fn from(value: (Address, PrecompileFn)) -> Self {
        PrecompileWithAddress(value.0, value.1)
    }
}

impl PrecompileWithAddress {
    /// Returns reference of address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.0
    }

    /// Returns reference of precompile.
    #[inline]
    pub fn precompile(&self) -> &PrecompileFn {
        &self.1
    }
}

/// Errors raised while decoding, validating or evaluating a pairing check input.
///
/// Every variant is a deterministic function of the input bytes. None of them is
/// ever turned into a `false` pairing result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairingError {
    /// Buffer or slot size mismatch.
    InvalidLength,
    /// One of the 16 reserved top bytes of a field element slot is not zero.
    InvalidPadding,
    /// The 48 byte field element is not strictly below the base field modulus.
    ///
    /// Field elements are parsed strictly: values `>= p` are rejected rather
    /// than reduced modulo `p`.
    NonCanonicalFieldElement,
    /// The decoded coordinates do not satisfy the curve equation.
    NotOnCurve,
    /// The point is on the curve but outside the prime order subgroup.
    NotInSubgroup,
    /// The pairing backend failed after all structural checks passed.
    PairingComputeError,
    /// Gas limit is lower than the cost of the call.
    OutOfGas,
}

impl PairingError {
    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}

impl core::error::Error for PairingError {}

impl fmt::Display for PairingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidLength => "invalid input length",
            Self::InvalidPadding => "top 16 bytes of field element are not zero",
            Self::NonCanonicalFieldElement => "non-canonical fp value",
            Self::NotOnCurve => "element not on curve",
            Self::NotInSubgroup => "element not in the prime order subgroup",
            Self::PairingComputeError => "pairing computation failed",
            Self::OutOfGas => "out of gas",
        };
        f.write_str(s)
    }
}
