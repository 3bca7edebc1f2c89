//! Field element codec: 64 byte slots holding 16 zero bytes followed by a
//! 48 byte big-endian canonical field element.
use super::backend::Bls12381Backend;
use crate::bls12_381_const::{FP_LENGTH, FP_PAD_BY, MODULUS_REPR, PADDED_FP_LENGTH};
use crate::PairingError;
use core::cmp::Ordering;

/// Removes zeros with which the precompile inputs are left padded to 64 bytes.
pub fn remove_padding(input: &[u8]) -> Result<&[u8; FP_LENGTH], PairingError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PairingError::InvalidLength);
    }
    let (padding, unpadded) = input.split_at(FP_PAD_BY);
    if !padding.iter().all(|&x| x == 0) {
        return Err(PairingError::InvalidPadding);
    }
    unpadded.try_into().map_err(|_| PairingError::InvalidLength)
}

/// Checks if the input is a valid big-endian representation of a field element.
pub fn is_canonical(input: &[u8; FP_LENGTH]) -> bool {
    for (i, modul) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modul) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    // false if matching the modulus
    false
}

/// Decodes a padded field element.
///
/// Non-canonical values (`>= p`) are rejected here, before the backend parser
/// runs, so the result does not depend on whether the backend reduces.
pub fn decode_fp<B: Bls12381Backend>(input: &[u8]) -> Result<B::Fp, PairingError> {
    let unpadded = remove_padding(input)?;
    if !is_canonical(unpadded) {
        return Err(PairingError::NonCanonicalFieldElement);
    }
    B::fp_from_bendian(unpadded).ok_or(PairingError::NonCanonicalFieldElement)
}

/// Encodes a single finite field element into a freshly allocated padded slot.
pub fn encode_fp<B: Bls12381Backend>(fp: &B::Fp) -> [u8; PADDED_FP_LENGTH] {
    let mut out = [0u8; PADDED_FP_LENGTH];
    out[FP_PAD_BY..].copy_from_slice(&B::fp_to_bendian(fp));
    out
}
