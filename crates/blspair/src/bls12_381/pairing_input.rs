//! Conversion between the flat pairing check wire format and an ordered list of
//! validated (G1, G2) pairs.
use super::backend::Bls12381Backend;
use super::g1::{decode_g1, encode_g1};
use super::g2::{decode_g2, encode_g2};
use super::subgroup::{check_g1_subgroup, check_g2_subgroup};
use crate::bls12_381_const::{PADDED_G1_LENGTH, PAIRING_INPUT_LENGTH, SCALAR_LENGTH};
use crate::PairingError;
use derive_where::derive_where;
use std::vec::Vec;

/// A (G1, G2) pair as consumed by the pairing check.
pub type PairingPair<B> = (<B as Bls12381Backend>::G1, <B as Bls12381Backend>::G2);

/// Ordered, non-empty list of validated pairs.
///
/// Every point satisfies its curve equation and belongs to the order `r`
/// subgroup. Repeated pairs and pairs containing the point at infinity are legal.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct PairingInput<B: Bls12381Backend> {
    pairs: Vec<PairingPair<B>>,
}

impl<B: Bls12381Backend> PairingInput<B> {
    /// Wraps already validated pairs.
    ///
    /// Fails with [`PairingError::InvalidLength`] on an empty list. The points
    /// are revalidated so an input built here is indistinguishable from a parsed one.
    pub fn new(pairs: Vec<PairingPair<B>>) -> Result<Self, PairingError> {
        if pairs.is_empty() {
            return Err(PairingError::InvalidLength);
        }
        for (index, (g1, g2)) in pairs.iter().enumerate() {
            check_pair::<B>(index, g1, g2)?;
        }
        Ok(Self { pairs })
    }

    /// Parses `384 * k` bytes (`k >= 1`) into `k` validated pairs.
    ///
    /// Each 384 byte chunk holds a 128 byte G1 encoding followed by a 256 byte
    /// G2 encoding. The error of the lowest indexed failing chunk is returned.
    pub fn parse(input: &[u8]) -> Result<Self, PairingError> {
        let input_len = input.len();
        if input_len == 0 || input_len % PAIRING_INPUT_LENGTH != 0 {
            log::debug!(
                "Pairing input length should be multiple of {PAIRING_INPUT_LENGTH}, was {input_len}"
            );
            return Err(PairingError::InvalidLength);
        }

        let pairs = decode_pairs::<B>(input)?;
        log::trace!("decoded {} pairing pairs", pairs.len());
        Ok(Self { pairs })
    }

    /// Serializes the pairs back into the flat wire format.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pairs.len() * PAIRING_INPUT_LENGTH);
        for (g1, g2) in &self.pairs {
            out.extend_from_slice(&encode_g1::<B>(g1));
            out.extend_from_slice(&encode_g2::<B>(g2));
        }
        out
    }

    /// Returns the pairs in input order.
    pub fn pairs(&self) -> &[PairingPair<B>] {
        &self.pairs
    }

    /// Number of pairs, always at least one.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`, a pairing input holds at least one pair.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consumes the input and returns the pairs.
    pub fn into_pairs(self) -> Vec<PairingPair<B>> {
        self.pairs
    }
}

/// Builds `(a * G1, b * G2)` from big-endian scalars.
///
/// Used to construct test vectors, never on the verification path.
pub fn generator_pair<B: Bls12381Backend>(
    a: &[u8; SCALAR_LENGTH],
    b: &[u8; SCALAR_LENGTH],
) -> PairingPair<B> {
    (
        B::g1_mul(&B::g1_generator(), a),
        B::g2_mul(&B::g2_generator(), b),
    )
}

/// Runs both subgroup checks of a decoded pair, G1 first.
fn check_pair<B: Bls12381Backend>(
    index: usize,
    g1: &B::G1,
    g2: &B::G2,
) -> Result<(), PairingError> {
    // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
    check_g1_subgroup::<B>(g1)
        .inspect_err(|err| log::debug!("pair {index}: G1 point rejected: {err}"))?;
    check_g2_subgroup::<B>(g2)
        .inspect_err(|err| log::debug!("pair {index}: G2 point rejected: {err}"))
}

/// Decodes one 384 byte chunk: G1 decode, G2 decode, then the subgroup checks.
fn decode_pair<B: Bls12381Backend>(
    index: usize,
    chunk: &[u8],
) -> Result<PairingPair<B>, PairingError> {
    let (g1_bytes, g2_bytes) = chunk.split_at(PADDED_G1_LENGTH);

    let g1 = decode_g1::<B>(g1_bytes)
        .inspect_err(|err| log::debug!("pair {index}: G1 point rejected: {err}"))?;
    let g2 = decode_g2::<B>(g2_bytes)
        .inspect_err(|err| log::debug!("pair {index}: G2 point rejected: {err}"))?;

    check_pair::<B>(index, &g1, &g2)?;
    Ok((g1, g2))
}

#[cfg(not(feature = "parallel"))]
fn decode_pairs<B: Bls12381Backend>(input: &[u8]) -> Result<Vec<PairingPair<B>>, PairingError> {
    input
        .chunks_exact(PAIRING_INPUT_LENGTH)
        .enumerate()
        .map(|(index, chunk)| decode_pair::<B>(index, chunk))
        .collect()
}

#[cfg(feature = "parallel")]
fn decode_pairs<B: Bls12381Backend>(input: &[u8]) -> Result<Vec<PairingPair<B>>, PairingError> {
    use rayon::prelude::*;

    let decoded: Vec<Result<PairingPair<B>, PairingError>> = input
        .par_chunks_exact(PAIRING_INPUT_LENGTH)
        .enumerate()
        .map(|(index, chunk)| decode_pair::<B>(index, chunk))
        .collect();

    // Sequential collect keeps the lowest indexed error, same as the serial path.
    decoded.into_iter().collect()
}
