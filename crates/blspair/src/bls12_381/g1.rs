use super::backend::Bls12381Backend;
use super::subgroup::check_g1_subgroup;
use super::utils::{decode_fp, encode_fp};
use crate::bls12_381_const::{PADDED_FP_LENGTH, PADDED_G1_LENGTH};
use crate::PairingError;

/// Encodes a G1 point in affine format into a 128 byte slot with padded elements.
///
/// The point at infinity is encoded as all zeroes.
pub fn encode_g1<B: Bls12381Backend>(point: &B::G1) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    let Some((x, y)) = B::g1_xy(point) else {
        return out;
    };
    out[..PADDED_FP_LENGTH].copy_from_slice(&encode_fp::<B>(&x));
    out[PADDED_FP_LENGTH..].copy_from_slice(&encode_fp::<B>(&y));
    out
}

/// Decodes a G1 point in affine format from a 128 byte slot.
///
/// - If the x or y coordinate do not represent a canonical padded field element,
///   an error is returned. See [`decode_fp`] for more information.
/// - An all zero slot is the point at infinity. `(0, 0)` is not on the curve,
///   so this encoding cannot clash with a regular point.
/// - If the point is not on the curve, an error is returned.
///
/// Note: no subgroup check is performed, see [`extract_g1_input`].
pub fn decode_g1<B: Bls12381Backend>(input: &[u8]) -> Result<B::G1, PairingError> {
    if input.len() != PADDED_G1_LENGTH {
        return Err(PairingError::InvalidLength);
    }

    let x = decode_fp::<B>(&input[..PADDED_FP_LENGTH])?;
    let y = decode_fp::<B>(&input[PADDED_FP_LENGTH..])?;

    if input.iter().all(|&b| b == 0) {
        return Ok(B::g1_identity());
    }

    let point = B::g1_from_xy_unchecked(x, y);
    if !B::g1_is_on_curve(&point) {
        return Err(PairingError::NotOnCurve);
    }
    Ok(point)
}

/// Extracts a G1 point in Affine format from a 128 byte slice representation
/// and checks that it belongs to the prime order subgroup.
pub fn extract_g1_input<B: Bls12381Backend>(input: &[u8]) -> Result<B::G1, PairingError> {
    let point = decode_g1::<B>(input)?;
    check_g1_subgroup::<B>(&point)?;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::arkworks::ArkworksBackend;
    use crate::bls12_381::backend::scalar_from_u64;
    use alloy_primitives::hex;

    type B = ArkworksBackend;

    // G1 generator from EIP-2537.
    const G1_GENERATOR: [u8; PADDED_G1_LENGTH] = hex!(
        "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
    );

    #[test]
    fn decodes_generator() {
        let point = decode_g1::<B>(&G1_GENERATOR).unwrap();
        assert_eq!(point, B::g1_generator());
        assert_eq!(encode_g1::<B>(&point), G1_GENERATOR);
    }

    #[test]
    fn round_trips_multiples() {
        for k in [2u64, 6, 1234567] {
            let point = B::g1_mul(&B::g1_generator(), &scalar_from_u64(k));
            assert_eq!(decode_g1::<B>(&encode_g1::<B>(&point)).unwrap(), point);
        }
    }

    #[test]
    fn all_zero_is_identity() {
        let point = decode_g1::<B>(&[0u8; PADDED_G1_LENGTH]).unwrap();
        assert_eq!(point, B::g1_identity());
        assert_eq!(B::g1_xy(&point), None);
        assert_eq!(encode_g1::<B>(&B::g1_identity()), [0u8; PADDED_G1_LENGTH]);
    }

    #[test]
    fn zero_x_with_nonzero_y_is_not_identity() {
        let mut input = [0u8; PADDED_G1_LENGTH];
        input[PADDED_G1_LENGTH - 1] = 2;
        // (0, 2) satisfies y^2 = x^3 + 4.
        let point = decode_g1::<B>(&input).unwrap();
        assert_ne!(point, B::g1_identity());
    }

    #[test]
    fn perturbed_y_is_not_on_curve() {
        let mut input = G1_GENERATOR;
        input[PADDED_G1_LENGTH - 1] ^= 1;
        assert_eq!(decode_g1::<B>(&input), Err(PairingError::NotOnCurve));
    }

    #[test]
    fn wrong_length() {
        assert_eq!(
            decode_g1::<B>(&G1_GENERATOR[..PADDED_G1_LENGTH - 1]),
            Err(PairingError::InvalidLength)
        );
    }

    #[test]
    fn padding_error_wins_over_curve_error() {
        let mut input = G1_GENERATOR;
        input[PADDED_FP_LENGTH] = 1;
        assert_eq!(decode_g1::<B>(&input), Err(PairingError::InvalidPadding));
    }
}
