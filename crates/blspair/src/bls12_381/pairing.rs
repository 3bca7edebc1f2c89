use super::backend::{Bls12381Backend, DefaultBackend};
use super::pairing_input::{PairingInput, PairingPair};
use crate::bls12_381_const::{
    PAIRING_ADDRESS, PAIRING_INPUT_LENGTH, PAIRING_MULTIPLIER_BASE, PAIRING_OFFSET_BASE,
};
use crate::{PairingError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};
use alloy_primitives::B256;
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_PAIRING_CHECK precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(PAIRING_ADDRESS, pairing_run);

/// Returns whether `e(P_1, Q_1) * ... * e(P_k, Q_k)` is the identity of the
/// target group.
///
/// Pairs with a point at infinity contribute the identity and are skipped. If
/// no pair remains, the product is empty and the check succeeds. A backend
/// failure is reported as [`PairingError::PairingComputeError`], never as `false`.
pub fn evaluate<B: Bls12381Backend>(input: &PairingInput<B>) -> Result<bool, PairingError> {
    let pairs: Vec<PairingPair<B>> = input
        .pairs()
        .iter()
        .filter(|(g1, g2)| B::g1_xy(g1).is_some() && B::g2_xy(g2).is_some())
        .copied()
        .collect();

    if pairs.is_empty() {
        log::trace!("all {} pairs contain the point at infinity", input.len());
        return Ok(true);
    }

    log::trace!("running multi pairing over {} of {} pairs", pairs.len(), input.len());
    B::multi_pairing_check(&pairs).map_err(|err| {
        log::debug!("pairing backend failed: {err}");
        PairingError::PairingComputeError
    })
}

/// Encodes the pairing result as 32 bytes: 31 zero bytes followed by `0x01`
/// if the check succeeded, `0x00` otherwise.
pub fn encode_result(result: bool) -> B256 {
    B256::with_last_byte(result as u8)
}

/// Parses, validates and evaluates a pairing check input with the given backend.
pub fn pairing_check_with<B: Bls12381Backend>(input: &[u8]) -> Result<B256, PairingError> {
    let input = PairingInput::<B>::parse(input)?;
    evaluate(&input).map(encode_result)
}

/// Parses, validates and evaluates a pairing check input with the
/// [`DefaultBackend`].
pub fn pairing_check(input: &[u8]) -> Result<B256, PairingError> {
    pairing_check_with::<DefaultBackend>(input)
}

/// Gas required for a pairing check over `k` pairs.
pub const fn pairing_gas(k: usize) -> u64 {
    PAIRING_MULTIPLIER_BASE * k as u64 + PAIRING_OFFSET_BASE
}

/// Pairing call expects 384*k (k being a positive integer) bytes as an inputs
/// that is interpreted as byte concatenation of k slices. Each slice has the
/// following structure:
///    * 128 bytes of G1 point encoding
///    * 256 bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order q.
/// Output is 32 bytes where first 31 bytes are equal to 0x00 and the last byte
/// is 0x01 if pairing result is equal to the multiplicative identity in a pairing
/// target field and 0x00 otherwise.
///
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing>
pub fn pairing_run(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % PAIRING_INPUT_LENGTH != 0 {
        return Err(PairingError::InvalidLength);
    }

    let k = input_len / PAIRING_INPUT_LENGTH;
    let required_gas = pairing_gas(k);
    if required_gas > gas_limit {
        return Err(PairingError::OutOfGas);
    }

    let output = pairing_check(input)?;
    Ok(PrecompileOutput::new(required_gas, output.into()))
}
