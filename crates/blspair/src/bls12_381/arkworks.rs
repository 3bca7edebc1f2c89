//! Pure Rust backend on top of the arkworks BLS12-381 implementation.
use super::backend::Bls12381Backend;
use crate::bls12_381_const::{FP_LENGTH, SCALAR_LENGTH};
use crate::PairingError;
use std::vec::Vec;

use ark_bls12_381::{Bls12_381, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{One, PrimeField};
use ark_serialize::CanonicalDeserialize;

/// [`Bls12381Backend`] implemented with `ark-bls12-381`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArkworksBackend;

impl Bls12381Backend for ArkworksBackend {
    type Fp = Fq;
    type G1 = G1Affine;
    type G2 = G2Affine;

    #[inline]
    fn fp_from_bendian(input: &[u8; FP_LENGTH]) -> Option<Fq> {
        let mut input_le = *input;
        // Reverse in-place to convert from big-endian to little-endian.
        input_le.reverse();

        // Deserialization goes through `from_bigint`, which rejects values >= p.
        Fq::deserialize_uncompressed(&input_le[..]).ok()
    }

    #[inline]
    fn fp_to_bendian(fp: &Fq) -> [u8; FP_LENGTH] {
        let mut out = [0u8; FP_LENGTH];
        // Limbs are little-endian u64s, the most significant one goes first.
        let limbs = fp.into_bigint().0;
        for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    #[inline]
    fn g1_identity() -> G1Affine {
        G1Affine::zero()
    }

    #[inline]
    fn g1_from_xy_unchecked(x: Fq, y: Fq) -> G1Affine {
        // We cannot use `G1Affine::new` because that triggers an assert if the point is not on the curve.
        G1Affine::new_unchecked(x, y)
    }

    #[inline]
    fn g1_xy(p: &G1Affine) -> Option<(Fq, Fq)> {
        (!p.infinity).then_some((p.x, p.y))
    }

    #[inline]
    fn g1_is_on_curve(p: &G1Affine) -> bool {
        p.is_on_curve()
    }

    #[inline]
    fn g1_is_in_subgroup(p: &G1Affine) -> bool {
        p.is_in_correct_subgroup_assuming_on_curve()
    }

    #[inline]
    fn g2_identity() -> G2Affine {
        G2Affine::zero()
    }

    #[inline]
    fn g2_from_xy_unchecked(x: [Fq; 2], y: [Fq; 2]) -> G2Affine {
        G2Affine::new_unchecked(Fq2::new(x[0], x[1]), Fq2::new(y[0], y[1]))
    }

    #[inline]
    fn g2_xy(p: &G2Affine) -> Option<([Fq; 2], [Fq; 2])> {
        (!p.infinity).then_some(([p.x.c0, p.x.c1], [p.y.c0, p.y.c1]))
    }

    #[inline]
    fn g2_is_on_curve(p: &G2Affine) -> bool {
        p.is_on_curve()
    }

    #[inline]
    fn g2_is_in_subgroup(p: &G2Affine) -> bool {
        p.is_in_correct_subgroup_assuming_on_curve()
    }

    /// Performs a pairing check on a list of G1 and G2 point pairs and
    /// returns true if the result is equal to the identity element.
    #[inline]
    fn multi_pairing_check(pairs: &[(G1Affine, G2Affine)]) -> Result<bool, PairingError> {
        if pairs.is_empty() {
            return Err(PairingError::PairingComputeError);
        }

        let (g1_points, g2_points): (Vec<G1Affine>, Vec<G2Affine>) =
            pairs.iter().copied().unzip();

        let pairing_result = Bls12_381::multi_pairing(&g1_points, &g2_points);
        Ok(pairing_result.0.is_one())
    }

    #[inline]
    fn g1_generator() -> G1Affine {
        G1Affine::generator()
    }

    #[inline]
    fn g2_generator() -> G2Affine {
        G2Affine::generator()
    }

    #[inline]
    fn g1_mul(p: &G1Affine, scalar: &[u8; SCALAR_LENGTH]) -> G1Affine {
        let fr = Fr::from_be_bytes_mod_order(scalar);
        p.mul_bigint(fr.into_bigint()).into_affine()
    }

    #[inline]
    fn g2_mul(p: &G2Affine, scalar: &[u8; SCALAR_LENGTH]) -> G2Affine {
        let fr = Fr::from_be_bytes_mod_order(scalar);
        p.mul_bigint(fr.into_bigint()).into_affine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::backend::scalar_from_u64;
    use crate::bls12_381_const::MODULUS_REPR;

    #[test]
    fn fp_bendian_round_trip() {
        let mut bytes = [0u8; FP_LENGTH];
        bytes[FP_LENGTH - 1] = 0x2a;
        bytes[0] = 0x11;
        let fp = ArkworksBackend::fp_from_bendian(&bytes).unwrap();
        assert_eq!(ArkworksBackend::fp_to_bendian(&fp), bytes);
    }

    #[test]
    fn modulus_is_rejected() {
        assert_eq!(ArkworksBackend::fp_from_bendian(&MODULUS_REPR), None);
    }

    #[test]
    fn generators_are_valid() {
        let g1 = ArkworksBackend::g1_generator();
        let g2 = ArkworksBackend::g2_generator();
        assert!(ArkworksBackend::g1_is_on_curve(&g1));
        assert!(ArkworksBackend::g1_is_in_subgroup(&g1));
        assert!(ArkworksBackend::g2_is_on_curve(&g2));
        assert!(ArkworksBackend::g2_is_in_subgroup(&g2));
    }

    #[test]
    fn mul_by_zero_is_identity() {
        let g1 = ArkworksBackend::g1_mul(&ArkworksBackend::g1_generator(), &scalar_from_u64(0));
        assert_eq!(ArkworksBackend::g1_xy(&g1), None);
        assert_eq!(g1, ArkworksBackend::g1_identity());
    }

    #[test]
    fn empty_pairing_is_a_compute_error() {
        assert_eq!(
            ArkworksBackend::multi_pairing_check(&[]),
            Err(PairingError::PairingComputeError)
        );
    }
}
