use super::backend::Bls12381Backend;
use super::subgroup::check_g2_subgroup;
use super::utils::{decode_fp, encode_fp};
use crate::bls12_381_const::{PADDED_FP_LENGTH, PADDED_G2_LENGTH};
use crate::PairingError;

/// Encodes a G2 point in affine format into a 256 byte slot with padded elements.
///
/// Field order is `x.c0, x.c1, y.c0, y.c1`. The point at infinity is encoded as
/// all zeroes.
pub fn encode_g2<B: Bls12381Backend>(point: &B::G2) -> [u8; PADDED_G2_LENGTH] {
    let mut out = [0u8; PADDED_G2_LENGTH];
    let Some(([x0, x1], [y0, y1])) = B::g2_xy(point) else {
        return out;
    };
    for (slot, fp) in out.chunks_exact_mut(PADDED_FP_LENGTH).zip([x0, x1, y0, y1]) {
        slot.copy_from_slice(&encode_fp::<B>(&fp));
    }
    out
}

/// Decodes a G2 point in affine format from a 256 byte slot.
///
/// - If any of the four coordinates do not represent a canonical padded field
///   element, an error is returned.
/// - An all zero slot is the point at infinity.
/// - If the point is not on the curve, an error is returned.
///
/// Note: no subgroup check is performed, see [`extract_g2_input`].
pub fn decode_g2<B: Bls12381Backend>(input: &[u8]) -> Result<B::G2, PairingError> {
    if input.len() != PADDED_G2_LENGTH {
        return Err(PairingError::InvalidLength);
    }

    let x0 = decode_fp::<B>(&input[..PADDED_FP_LENGTH])?;
    let x1 = decode_fp::<B>(&input[PADDED_FP_LENGTH..2 * PADDED_FP_LENGTH])?;
    let y0 = decode_fp::<B>(&input[2 * PADDED_FP_LENGTH..3 * PADDED_FP_LENGTH])?;
    let y1 = decode_fp::<B>(&input[3 * PADDED_FP_LENGTH..])?;

    if input.iter().all(|&b| b == 0) {
        return Ok(B::g2_identity());
    }

    let point = B::g2_from_xy_unchecked([x0, x1], [y0, y1]);
    if !B::g2_is_on_curve(&point) {
        return Err(PairingError::NotOnCurve);
    }
    Ok(point)
}

/// Extracts a G2 point in Affine format from a 256 byte slice representation
/// and checks that it belongs to the prime order subgroup.
pub fn extract_g2_input<B: Bls12381Backend>(input: &[u8]) -> Result<B::G2, PairingError> {
    let point = decode_g2::<B>(input)?;
    check_g2_subgroup::<B>(&point)?;
    Ok(point)
}
